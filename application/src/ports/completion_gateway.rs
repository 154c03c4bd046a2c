//! Completion Gateway port
//!
//! Defines the interface for calling the external text-generation API.

use super::gateway_error::GatewayError;
use async_trait::async_trait;
use readiness_domain::{CompletionResponse, PromptPair};

/// Gateway for chat-completion calls
///
/// One invocation is exactly one outbound request: no retries, no caching.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the prompt pair and return the decoded response envelope
    async fn complete(&self, prompt: &PromptPair) -> Result<CompletionResponse, GatewayError>;
}
