//! Presentation layer for ai-readiness
//!
//! This crate contains the HTTP API (axum) and the CLI definitions.

pub mod api;
pub mod cli;

// Re-export commonly used types
pub use api::{ApiError, AppState, ServerOptions, router, serve};
pub use cli::commands::{Cli, Command, DeployArgs, ServeArgs};
