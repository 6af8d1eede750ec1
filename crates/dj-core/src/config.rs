use std::env;
use tracing::{debug, info};
use crate::error::ConfigError;
use crate::model_types::TextModel;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "VITE_GEMINI_API_KEY"];

#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: TextModel,
    pub base_url: String,
}

impl GeminiConfig {
    /// Read `.env` (if any) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            model = config.model.id(),
            base_url = %config.base_url,
            has_api_key = config.api_key.is_some(),
            "Gemini configuration loaded"
        );
        Ok(config)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let model = match lookup("GEMINI_MODEL") {
            Some(value) if !value.trim().is_empty() => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "GEMINI_MODEL", value })?,
            _ => TextModel::default(),
        };

        let base_url = lookup("GEMINI_API_BASE")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: TextModel::default(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
