//! Token usage tracking for LLM requests.

use serde::{Deserialize, Serialize};

/// Token usage reported for a completed generation.
///
/// # Examples
///
/// ```
/// use placard_core::TokenUsageData;
///
/// let usage = TokenUsageData::new(150, 50);
/// assert_eq!(*usage.input_tokens(), 150);
/// assert_eq!(usage.total_tokens(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct TokenUsageData {
    /// Number of tokens in the input/prompt.
    input_tokens: u64,
    /// Number of tokens in the generated output.
    output_tokens: u64,
}

impl TokenUsageData {
    /// Creates new token usage data.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Input plus output tokens.
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}
