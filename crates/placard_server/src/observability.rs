//! Tracing subscriber setup.

use crate::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if settings.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
