//! Configuration loading for ai-readiness
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Legacy variables: `PORT` and the credential variable (`AI_BUILDER_TOKEN`)
//! 2. `READINESS_*` environment variables (`READINESS_SERVER__PORT=9000`)
//! 3. `--config <path>` specified file, otherwise `./readiness.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileCompletionConfig,
    FileConfig, FileDeployConfig, FilePromptConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
