//! Bearer-authenticated JSON endpoint with status → error mapping

use readiness_application::GatewayError;
use readiness_domain::util::preview;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT_VALUE: &str = concat!("ai-readiness/", env!("CARGO_PKG_VERSION"));

/// A single POST target with its credential and timeout
#[derive(Debug, Clone)]
pub(crate) struct JsonEndpoint {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl JsonEndpoint {
    /// `timeout` bounds connect plus the full response body.
    pub(crate) fn new(
        url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                GatewayError::TransportFailure(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout,
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// POST `body` and decode a success reply as `R`.
    ///
    /// The credential is checked before any I/O.
    pub(crate) async fn post<B, R>(&self, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let token = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        debug!(url = %self.url, "POST");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_failure(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_failure(e))?;

        if status.as_u16() >= 400 {
            warn!(
                status = status.as_u16(),
                body = %preview(&text, 200),
                "upstream rejected request"
            );
            return Err(GatewayError::UpstreamError {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(body = %preview(&text, 200), "undecodable upstream body");
            GatewayError::InvalidBody(e.to_string())
        })
    }

    fn transport_failure(&self, error: reqwest::Error) -> GatewayError {
        let message = if error.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else {
            error.to_string()
        };
        warn!(url = %self.url, "transport failure: {}", message);
        GatewayError::TransportFailure(message)
    }
}

/// Join a base URL and an absolute path without doubling the slash
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
