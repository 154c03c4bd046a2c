//! Chat-completion adapter

use super::endpoint::{JsonEndpoint, join_url};
use crate::config::FileCompletionConfig;
use async_trait::async_trait;
use readiness_application::{CompletionGateway, CompletionParams, GatewayError};
use readiness_domain::{CompletionResponse, PromptPair};
use tracing::{debug, info, warn};

/// Path of the chat-completion endpoint under the base URL
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// [`CompletionGateway`] over HTTP.
///
/// One `complete` call is one POST: no retries, one timeout covering connect
/// and response. A missing credential fails before anything is sent.
#[derive(Debug, Clone)]
pub struct HttpCompletionGateway {
    endpoint: JsonEndpoint,
    params: CompletionParams,
}

impl HttpCompletionGateway {
    pub fn new(
        base_url: &str,
        params: CompletionParams,
        api_key: Option<String>,
    ) -> Result<Self, GatewayError> {
        let endpoint = JsonEndpoint::new(
            join_url(base_url, CHAT_COMPLETIONS_PATH),
            api_key,
            params.timeout,
        )?;
        Ok(Self { endpoint, params })
    }

    /// Build from the `[completion]` section, reading the credential from
    /// the environment
    pub fn from_config(config: &FileCompletionConfig) -> Result<Self, GatewayError> {
        let gateway = Self::new(
            &config.base_url,
            config.to_params(),
            config.resolve_api_key(),
        )?;
        if !gateway.endpoint.has_credential() {
            warn!(
                "{} is not set; analysis requests will fail until it is",
                config.api_key_env
            );
        }
        Ok(gateway)
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(&self, prompt: &PromptPair) -> Result<CompletionResponse, GatewayError> {
        let request = self.params.request_for(prompt);
        debug!(
            "Completion request: model {}, temperature {}, max_tokens {}",
            request.model, request.temperature, request.max_tokens
        );

        let response: CompletionResponse = self.endpoint.post(&request).await?;
        info!("Completion received from {}", self.endpoint.url());
        Ok(response)
    }
}
