//! Deployment Gateway port
//!
//! Defines the interface for submitting the service to the hosting API.

use super::gateway_error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of a deployment submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub service_name: String,
    pub repo_url: String,
    pub branch: String,
    pub port: u16,
}

/// Gateway for the hosting platform's deployment endpoint
#[async_trait]
pub trait DeploymentGateway: Send + Sync {
    /// Submit a deployment and return the platform's JSON reply as-is
    async fn deploy(&self, request: &DeploymentRequest)
    -> Result<serde_json::Value, GatewayError>;
}
