//! Application layer for ai-readiness
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CompletionParams;
pub use ports::{
    completion_gateway::CompletionGateway,
    deployment_gateway::{DeploymentGateway, DeploymentRequest},
    gateway_error::GatewayError,
};
pub use use_cases::analyze_answers::{AnalyzeAnswersUseCase, AnalyzeError};
pub use use_cases::deploy_service::{DeployServiceUseCase, summarize_reply};
