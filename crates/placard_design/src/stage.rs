//! Request stages and the status reported for each.

use placard_error::{ConversationError, ConversationErrorKind, PlacardResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which orchestration path a design request runs.
///
/// # Examples
///
/// ```
/// use placard_design::RequestStage;
///
/// assert_eq!(RequestStage::parse("style-choice").unwrap(), RequestStage::StyleChoice);
/// assert_eq!(RequestStage::parse("style_choice").unwrap(), RequestStage::StyleChoice);
/// assert!(RequestStage::parse("publish").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum RequestStage {
    /// Describe the need, get style options back
    #[strum(to_string = "initial")]
    Initial,
    /// Pick an option, get LaTeX back
    #[strum(to_string = "style-choice", serialize = "style_choice")]
    StyleChoice,
    /// Ask for a targeted change to the current LaTeX
    #[strum(to_string = "update")]
    Update,
}

impl RequestStage {
    /// Parses a client-supplied tag, rejecting anything outside the closed set.
    pub fn parse(tag: &str) -> PlacardResult<Self> {
        RequestStage::from_str(tag.trim()).map_err(|_| {
            ConversationError::new(ConversationErrorKind::UnknownStage(tag.to_string())).into()
        })
    }

    /// Status reported to the caller once the stage completes.
    pub fn reply_status(self) -> ReplyStatus {
        match self {
            RequestStage::Initial => ReplyStatus::OptionsGenerated,
            RequestStage::StyleChoice => ReplyStatus::LatexGenerated,
            RequestStage::Update => ReplyStatus::LatexUpdate,
        }
    }
}

/// Outcome tag returned alongside the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReplyStatus {
    /// Style options were generated
    OptionsGenerated,
    /// A LaTeX document was generated
    LatexGenerated,
    /// The LaTeX document was updated
    LatexUpdate,
}
