//! API error responses

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use readiness_application::{AnalyzeError, GatewayError};
use serde_json::json;
use tracing::error;

/// A failed request: status code plus a human-readable `detail`.
///
/// Serialized as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        let api_error = match &err {
            AnalyzeError::Validation(e) => ApiError::new(
                StatusCode::BAD_REQUEST,
                format!("{}. Please answer all questions", e),
            ),
            AnalyzeError::Gateway(GatewayError::UpstreamError { status, body }) => ApiError::new(
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("AI API call failed: {}", body),
            ),
            AnalyzeError::Gateway(GatewayError::MissingCredential) => ApiError::internal(
                "Error processing request: AI API credential is not configured",
            ),
            AnalyzeError::Gateway(e) => {
                ApiError::internal(format!("Error processing request: {}", e))
            }
            AnalyzeError::Extraction(_) => {
                ApiError::internal("AI API returned an unexpected response format")
            }
        };

        if api_error.status.is_server_error() {
            error!("Analysis failed ({}): {}", api_error.status, err);
        }
        api_error
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_domain::{ExtractionError, ValidationError};

    #[test]
    fn test_validation_is_bad_request() {
        let err: ApiError = AnalyzeError::Validation(ValidationError::IncompleteAnswers {
            answered: 5,
            required: 9,
            total: 10,
        })
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.detail.contains("Incomplete answers"));
    }

    #[test]
    fn test_upstream_status_is_propagated() {
        let err: ApiError = AnalyzeError::Gateway(GatewayError::UpstreamError {
            status: 429,
            body: "rate limited".to_string(),
        })
        .into();
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.detail, "AI API call failed: rate limited");
    }

    #[test]
    fn test_internal_failures() {
        let cases = [
            AnalyzeError::Gateway(GatewayError::MissingCredential),
            AnalyzeError::Gateway(GatewayError::TransportFailure("reset".to_string())),
            AnalyzeError::Gateway(GatewayError::InvalidBody("eof".to_string())),
            AnalyzeError::Extraction(ExtractionError::MalformedUpstreamResponse(
                "choices is empty".to_string(),
            )),
        ];
        for case in cases {
            let err: ApiError = case.into();
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_unrepresentable_upstream_status_falls_back() {
        let err: ApiError = AnalyzeError::Gateway(GatewayError::UpstreamError {
            status: 1000,
            body: String::new(),
        })
        .into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
