//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind (default: "0.0.0.0")
    pub host: String,
    /// Listen port (default: 8000; `PORT` overrides)
    pub port: u16,
    /// Directory holding `index.html` and the front-end assets
    pub static_dir: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: "static".to_string(),
        }
    }
}

impl FileServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
