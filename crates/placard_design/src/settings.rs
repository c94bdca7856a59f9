//! Per-call generation settings.

use derive_getters::Getters;
use placard_core::{GenerateRequest, Message};
use placard_error::{ModelsError, ModelsErrorKind, PlacardResult};

/// Model and output budget applied to every call a component makes.
///
/// # Examples
///
/// ```
/// use placard_design::GenerationSettings;
///
/// let settings = GenerationSettings::builder().max_tokens(2048u32).build().unwrap();
/// assert_eq!(*settings.max_tokens(), 2048);
/// assert!(settings.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationSettings {
    /// Model override; `None` uses the driver's default
    #[builder(default)]
    model: Option<String>,
    /// Output budget in tokens
    #[builder(default = "1024")]
    max_tokens: u32,
}

impl GenerationSettings {
    /// Creates a builder for GenerationSettings.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }

    /// Assembles a request with these settings.
    pub fn request(&self, system: String, messages: Vec<Message>) -> PlacardResult<GenerateRequest> {
        GenerateRequest::builder()
            .system(system)
            .messages(messages)
            .max_tokens(self.max_tokens)
            .model(self.model.clone())
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::InvalidRequest(e.to_string())).into())
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: 1024,
        }
    }
}
