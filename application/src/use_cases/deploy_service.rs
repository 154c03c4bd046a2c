//! Deploy Service use case
//!
//! Submits this service to the hosting platform in a single request.

use crate::ports::deployment_gateway::{DeploymentGateway, DeploymentRequest};
use crate::ports::gateway_error::GatewayError;
use std::sync::Arc;
use tracing::{error, info};

/// Use case for a one-shot deployment submission
pub struct DeployServiceUseCase {
    gateway: Arc<dyn DeploymentGateway>,
}

impl DeployServiceUseCase {
    pub fn new(gateway: Arc<dyn DeploymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        request: &DeploymentRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        info!(
            "Deploying service {} from {} ({}), port {}",
            request.service_name, request.repo_url, request.branch, request.port
        );

        let reply = self
            .gateway
            .deploy(request)
            .await
            .inspect_err(|e| error!("Deployment failed: {}", e))?;

        info!("Deployment request accepted");
        Ok(reply)
    }
}

/// Human-readable lines for the fields of a deployment reply worth
/// highlighting: `status`, `message` and `deployment_prompt_url`.
///
/// Absent fields are skipped; non-string values are rendered as JSON.
pub fn summarize_reply(reply: &serde_json::Value) -> Vec<String> {
    [
        ("status", "Status"),
        ("message", "Message"),
        ("deployment_prompt_url", "Deployment prompt URL"),
    ]
    .into_iter()
    .filter_map(|(field, label)| {
        reply.get(field).map(|value| match value.as_str() {
            Some(text) => format!("{label}: {text}"),
            None => format!("{label}: {value}"),
        })
    })
    .collect()
}
