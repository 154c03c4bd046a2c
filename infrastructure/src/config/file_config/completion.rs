//! Completion API configuration from TOML (`[completion]` section)

use readiness_application::CompletionParams;
use readiness_domain::completion::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the AI Builder backend
pub const DEFAULT_BASE_URL: &str = "https://www.ai-builders.com/resources/students-backend";

/// Environment variable holding the bearer credential
pub const DEFAULT_API_KEY_ENV: &str = "AI_BUILDER_TOKEN";

/// Raw completion API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Base URL; `/v1/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum output tokens.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Environment variable name for the API key (default: "AI_BUILDER_TOKEN").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: 60,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl FileCompletionConfig {
    /// Application-level request parameters
    pub fn to_params(&self) -> CompletionParams {
        CompletionParams::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Credential from the configured env var, falling back to `api_key`.
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        std::env::var(&self.api_key_env)
            .ok()
            .filter(present)
            .or_else(|| self.api_key.clone().filter(present))
    }
}
