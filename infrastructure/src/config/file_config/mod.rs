//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod completion;
mod deploy;
mod prompt;
mod server;

pub use completion::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileCompletionConfig};
pub use deploy::FileDeployConfig;
pub use prompt::FilePromptConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener and static assets
    pub server: FileServerConfig,
    /// Completion endpoint and request parameters
    pub completion: FileCompletionConfig,
    /// Prompt construction
    pub prompt: FilePromptConfig,
    /// Deployment submission
    pub deploy: FileDeployConfig,
}

/// Invalid value detected after all sources are merged
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("completion.temperature must be within 0.0..=2.0, got {0}")]
    TemperatureOutOfRange(f64),
}

impl FileConfig {
    /// Validate the merged configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push(ConfigValidationError::Empty {
                field: "server.host",
            });
        }
        if self.completion.base_url.trim().is_empty() {
            errors.push(ConfigValidationError::Empty {
                field: "completion.base_url",
            });
        }
        if self.completion.model.trim().is_empty() {
            errors.push(ConfigValidationError::Empty {
                field: "completion.model",
            });
        }
        if self.completion.api_key_env.trim().is_empty() {
            errors.push(ConfigValidationError::Empty {
                field: "completion.api_key_env",
            });
        }
        if !(0.0..=2.0).contains(&self.completion.temperature) {
            errors.push(ConfigValidationError::TemperatureOutOfRange(
                self.completion.temperature,
            ));
        }
        if self.completion.max_tokens == 0 {
            errors.push(ConfigValidationError::Zero {
                field: "completion.max_tokens",
            });
        }
        if self.completion.timeout_secs == 0 {
            errors.push(ConfigValidationError::Zero {
                field: "completion.timeout_secs",
            });
        }
        if self.deploy.timeout_secs == 0 {
            errors.push(ConfigValidationError::Zero {
                field: "deploy.timeout_secs",
            });
        }

        errors
    }
}
