//! Prompt text: the brand instruction, the analysis instruction and the synthesized
//! user turns for each stage.

use crate::RequestStage;
use placard_error::{ConfigError, PlacardResult};
use std::path::Path;

/// Brand instruction used when no prompt file is configured.
pub const DEFAULT_BRAND_PROMPT: &str = r#"You are a design assistant for Villa Klint. You create LaTeX signs and printed materials that follow the Villa Klint brand guidelines exactly.

LaTeX requirements:
1. The code must compile on Overleaf with pdfLaTeX.
2. Use only standard LaTeX packages.
3. Do not use XeLaTeX-only packages such as fontspec.
4. Use fallback fonts that ship with standard LaTeX distributions.

Brand elements:
- Colors:
  * Washed Green (#61603F) - primary
  * Light Washed Green (#B1B79B)
  * Pure White (#FFFFFF)
  * Off Black (#1A1A1A)
  * Burnt Orange (#E47436)
  * Pale Sky Blue (#CDE7E9)
- Typography:
  * Headings: GT Alpina Thin and Extended Thin Italic
  * Subheadings: Söhne Buch
  * Body text: Söhne Leicht
  * Fallbacks: Georgia for headings, Arial for body text

Working with requests:
1. Start by asking about styling preferences and offer numbered options that fit the brand.
2. Describe each option concretely in terms of the brand elements above.
3. Generate LaTeX code only after the user has chosen a style.

Never generate code before the style preference is confirmed."#;

/// System instruction for extracting a brand prompt from a guideline document.
pub const ANALYSIS_PROMPT: &str = r#"You are a brand guidelines analyzer. Extract the key elements of the attached brand guide and restructure them as a system prompt.

Extract:
1. Brand identity and purpose
2. Color schemes, primary and accent, with hex codes
3. Typography: fonts, sizes, spacing and usage rules
4. Logo usage rules and placement
5. Specific design elements or patterns
6. Image guidelines and usage

The system prompt you write must:
1. Open with a clear role definition
2. List every brand element in a structured way
3. Include the specific rules and measurements
4. Give clear usage guidelines
5. Close with instructions for handling user requests

Use clear hierarchical formatting with main categories and subcategories."#;

const STYLE_CHOICE_INSTRUCTION: &str = "Important: When a user selects an option, generate the LaTeX code immediately without asking additional questions.";

const UPDATE_INSTRUCTION: &str = "Important: When a user requests a change to existing LaTeX code, apply only the requested change and return the complete updated document. Do not change anything else and do not ask additional questions.";

/// The brand instruction kept in the system context of every design call.
///
/// # Examples
///
/// ```
/// use placard_design::{BrandPrompt, RequestStage};
///
/// let brand = BrandPrompt::new("Use only teal.");
/// assert_eq!(brand.system_for(RequestStage::Initial), "Use only teal.");
/// assert!(brand.system_for(RequestStage::StyleChoice).starts_with("Use only teal.\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPrompt(String);

impl BrandPrompt {
    /// Wraps prompt text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Loads prompt text from a file. Empty files are rejected.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PlacardResult<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read brand prompt {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        if text.trim().is_empty() {
            return Err(ConfigError::new(format!(
                "Brand prompt {} is empty",
                path.as_ref().display()
            ))
            .into());
        }

        Ok(Self(text))
    }

    /// The raw prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// System instruction for a stage: the brand prompt, plus the stage's constraint.
    pub fn system_for(&self, stage: RequestStage) -> String {
        match stage {
            RequestStage::Initial => self.0.clone(),
            RequestStage::StyleChoice => format!("{}\n{}", self.0, STYLE_CHOICE_INSTRUCTION),
            RequestStage::Update => format!("{}\n{}", self.0, UPDATE_INSTRUCTION),
        }
    }
}

impl Default for BrandPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND_PROMPT)
    }
}

/// User turn sent when the user picks one of the offered options.
pub fn style_choice_turn(choice: &str) -> String {
    format!(
        "I choose option {}. Please generate the LaTeX code directly without asking any additional questions.",
        choice.trim()
    )
}

/// User turn sent when the user asks for a change to the current document.
pub fn update_turn(latex: &str, change: &str) -> String {
    format!(
        "Here is the current LaTeX code:\n\n{}\n\nPlease update it as follows: {}\n\nReturn the complete updated LaTeX code. Change only what was requested.",
        latex.trim_end(),
        change.trim()
    )
}

/// Text that accompanies the guideline document in an analysis call.
pub fn analysis_note(brand_name: Option<&str>) -> String {
    let target = match brand_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!(" for {}", name),
        None => String::new(),
    };
    format!(
        "Analyze this brand guideline document{} and create a structured system prompt that captures all key brand elements and usage rules.",
        target
    )
}
