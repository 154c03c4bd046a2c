//! Failures shared by every outbound HTTP port

use thiserror::Error;

/// Errors from a call to an external API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No bearer credential configured; nothing was sent.
    #[error("API credential is not configured")]
    MissingCredential,

    /// Timeout, DNS, connection reset: no HTTP status available.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The upstream answered with status >= 400.
    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamError { status: u16, body: String },

    /// A success status whose body could not be decoded.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl GatewayError {
    /// HTTP status reported by the upstream, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::UpstreamError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
