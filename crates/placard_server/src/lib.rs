//! HTTP surface for the Placard design relay.
//!
//! Exposes the design conversation and brand analysis over JSON:
//!
//! - `POST /generate-latex` runs one stage of a design conversation
//! - `POST /analyze-brand-guidelines` turns a guideline PDF into a brand prompt
//! - `GET` and `DELETE /conversation/{id}` inspect or forget a conversation
//! - `GET /health` reports liveness

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod dto;
mod error;
mod observability;
mod state;

pub use api::create_router;
pub use config::{
    BrandSettings, DEFAULT_CONFIG_FILE, FetchSettings, LoggingSettings, ModelSettings,
    PlacardConfig, ServerSettings,
};
pub use dto::{
    AnalyzeBody, AnalyzeResponse, ConversationView, DeleteResponse, GenerateLatexBody,
};
pub use error::ApiError;
pub use observability::init_tracing;
pub use state::AppState;
