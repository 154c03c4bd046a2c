//! Deployment submission adapter

use super::endpoint::{JsonEndpoint, join_url};
use async_trait::async_trait;
use readiness_application::{DeploymentGateway, DeploymentRequest, GatewayError};
use std::time::Duration;

/// Path of the deployment endpoint under the base URL
pub const DEPLOYMENTS_PATH: &str = "/v1/deployments";

/// [`DeploymentGateway`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpDeploymentGateway {
    endpoint: JsonEndpoint,
}

impl HttpDeploymentGateway {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            endpoint: JsonEndpoint::new(join_url(base_url, DEPLOYMENTS_PATH), api_key, timeout)?,
        })
    }
}

#[async_trait]
impl DeploymentGateway for HttpDeploymentGateway {
    async fn deploy(
        &self,
        request: &DeploymentRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        self.endpoint.post(request).await
    }
}
