//! Deployment configuration from TOML (`[deploy]` section)

use readiness_application::DeploymentRequest;
use serde::{Deserialize, Serialize};

/// Raw deployment submission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeployConfig {
    pub service_name: String,
    pub repo_url: String,
    pub branch: String,
    /// Port the deployed service listens on
    pub port: u16,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileDeployConfig {
    fn default() -> Self {
        Self {
            service_name: "ai-readiness".to_string(),
            repo_url: "https://github.com/grapeot/ai_readiness_survey".to_string(),
            branch: "master".to_string(),
            port: 8000,
            timeout_secs: 30,
        }
    }
}

impl FileDeployConfig {
    pub fn to_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            service_name: self.service_name.clone(),
            repo_url: self.repo_url.clone(),
            branch: self.branch.clone(),
            port: self.port,
        }
    }
}
