//! Mapping of workspace errors onto HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use placard_error::{ConversationError, ConversationErrorKind, PlacardError};
use serde_json::json;

/// Error returned by every handler.
///
/// Unknown conversations map to 404, malformed or incomplete requests to 400, and
/// everything else to 500. The body is always `{"detail": message}`.
#[derive(Debug)]
pub struct ApiError(PlacardError);

impl ApiError {
    /// Status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.0.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<PlacardError> for ApiError {
    fn from(err: PlacardError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = ConversationErrorKind::InvalidRequest(rejection.body_text());
        Self(ConversationError::new(kind).into())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, external = self.0.is_external(), "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        (status, Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}
