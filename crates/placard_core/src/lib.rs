//! Core data types for the Placard design relay.
//!
//! These are provider-neutral: the model drivers convert them to and from their own wire
//! formats, and the conversation layer stores them as history.

mod content;
mod message;
mod request;
mod role;
mod token_usage;

pub use content::{Content, ContentBlock};
pub use message::Message;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
};
pub use role::Role;
pub use token_usage::TokenUsageData;
