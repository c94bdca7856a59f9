//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
///
/// The system instruction travels separately from the turns, so only the two
/// conversational roles exist here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user (or the relay speaking on their behalf)
    #[display("user")]
    User,
    /// The model
    #[display("assistant")]
    Assistant,
}
