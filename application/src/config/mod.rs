//! Application-level configuration.
//!
//! - [`CompletionParams`]: fixed parameters of every completion request

pub mod completion_params;

pub use completion_params::CompletionParams;
