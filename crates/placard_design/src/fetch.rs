//! Plain HTTP download of guideline documents.

use placard_error::{FetchError, FetchErrorKind, HttpError, PlacardResult};
use std::time::Duration;

/// Downloads documents with a single GET, no retries.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    /// Creates a fetcher whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> PlacardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build fetch client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetches the raw bytes at `url`. Any non-success status is an error.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Request {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let bytes = response.bytes().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Body {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!(bytes = bytes.len(), "Document downloaded");
        Ok(bytes.to_vec())
    }
}
