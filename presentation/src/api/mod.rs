//! HTTP API
//!
//! - [`routes`]: `/api/questions`, `/api/analyze`, `/health`
//! - [`error::ApiError`]: maps pipeline failures to status codes
//! - [`server`]: router assembly, static assets, listener

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{ServerOptions, router, serve};
pub use state::AppState;
