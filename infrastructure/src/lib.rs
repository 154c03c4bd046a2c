//! Infrastructure layer for ai-readiness
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCompletionConfig, FileConfig, FileDeployConfig,
    FilePromptConfig, FileServerConfig,
};
pub use http::{HttpCompletionGateway, HttpDeploymentGateway};
