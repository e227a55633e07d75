use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{defaults, endpoints, paths};
use crate::error::DebugAiError;
use crate::llm::{GeminiClient, GenerationConfig, LlmClient};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            api_key_env: defaults::API_KEY_ENV.to_string(),
            base_url: None,
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: defaults::THEME.to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Loads the config file, falling back to defaults when it is missing or invalid.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match Self::from_toml_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config"),
                },
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not read config"),
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DebugAiError> {
        toml::from_str(content).map_err(|e| DebugAiError::Config(e.to_string()))
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn require_api_key(&self) -> Result<String, DebugAiError> {
        self.api_key()
            .ok_or_else(|| DebugAiError::MissingApiKey(self.llm.api_key_env.clone()))
    }

    /// Build the model handle for one session. Fails when no API key is set.
    pub fn build_llm_client(&self) -> Result<Box<dyn LlmClient>, DebugAiError> {
        let api_key = self.require_api_key()?;
        let client = GeminiClient::new(api_key)
            .with_model(self.llm.model.clone())
            .with_base_url(
                self.llm
                    .base_url
                    .clone()
                    .unwrap_or_else(|| endpoints::GEMINI_BASE_URL.to_string()),
            )
            .with_generation_config(self.llm.generation);
        Ok(Box::new(client))
    }
}
