//! Server configuration loaded from TOML.

use placard_design::{BrandPrompt, GenerationSettings};
use placard_error::{ConfigError, PlacardResult};
use placard_models::{AnthropicConfig, DEFAULT_ANTHROPIC_ENDPOINT, DEFAULT_ANTHROPIC_MODEL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File read when no `--config` is given. Its absence is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "placard.toml";

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file) is a valid configuration.
///
/// # Examples
///
/// ```
/// use placard_server::PlacardConfig;
///
/// let config: PlacardConfig = toml::from_str(
///     r#"
///     [server]
///     bind_addr = "0.0.0.0:9000"
///
///     [model]
///     analysis_max_tokens = 4096
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
/// assert_eq!(config.model.max_tokens, 1024);
/// assert_eq!(config.model.analysis_max_tokens, 4096);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacardConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerSettings,
    /// Model endpoint and output budgets
    #[serde(default)]
    pub model: ModelSettings,
    /// Brand prompt source
    #[serde(default)]
    pub brand: BrandSettings,
    /// Guideline document download
    #[serde(default)]
    pub fetch: FetchSettings,
    /// Log output
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl PlacardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> PlacardResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = toml::from_str(&contents).map_err(|e| {
            ConfigError::new(format!("Invalid configuration in {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Loads the named file, or [`DEFAULT_CONFIG_FILE`] if it exists, or defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> PlacardResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// The configured brand prompt, or the built-in one.
    pub fn brand_prompt(&self) -> PlacardResult<BrandPrompt> {
        match &self.brand.prompt_file {
            Some(path) => BrandPrompt::from_file(path),
            None => Ok(BrandPrompt::default()),
        }
    }

    /// Output budget for design conversation calls.
    pub fn design_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .max_tokens(self.model.max_tokens)
            .build()
            .unwrap_or_default()
    }

    /// Output budget for brand analysis calls.
    pub fn analysis_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .max_tokens(self.model.analysis_max_tokens)
            .build()
            .unwrap_or_default()
    }

    /// Anthropic client settings for the given key.
    ///
    /// # Errors
    ///
    /// Fails when the key is missing or blank.
    pub fn anthropic_config(&self, api_key: Option<&str>) -> PlacardResult<AnthropicConfig> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::new("ANTHROPIC_API_KEY not set"))?;

        AnthropicConfig::builder()
            .api_key(api_key)
            .endpoint(self.model.endpoint.clone())
            .model(self.model.name.clone())
            .max_tokens(self.model.max_tokens)
            .timeout(Duration::from_secs(self.model.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid model settings: {}", e)).into())
    }

    /// Timeout for guideline document downloads.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Model endpoint and output budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model identifier
    #[serde(default = "default_model_name")]
    pub name: String,
    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Output budget for design stages
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Output budget for brand analysis
    #[serde(default = "default_analysis_max_tokens")]
    pub analysis_max_tokens: u32,
    /// Per-request timeout in seconds
    #[serde(default = "default_model_timeout")]
    pub timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            endpoint: default_endpoint(),
            max_tokens: default_max_tokens(),
            analysis_max_tokens: default_analysis_max_tokens(),
            timeout_secs: default_model_timeout(),
        }
    }
}

/// Brand prompt source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandSettings {
    /// File holding the brand prompt; the built-in prompt is used when unset
    #[serde(default)]
    pub prompt_file: Option<PathBuf>,
}

/// Guideline document download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Download timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
        }
    }
}

/// Log output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_model_name() -> String {
    DEFAULT_ANTHROPIC_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ANTHROPIC_ENDPOINT.to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_analysis_max_tokens() -> u32 {
    2048
}

fn default_model_timeout() -> u64 {
    120
}

fn default_fetch_timeout() -> u64 {
    30
}
