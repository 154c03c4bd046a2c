//! Integration tests for the HTTP gateways.
//!
//! Uses wiremock for the upstream. Covers the request body, bearer auth,
//! status mapping, undecodable bodies, the timeout, and the credential check.

use std::time::Duration;

use readiness_application::{
    CompletionGateway, CompletionParams, DeploymentGateway, DeploymentRequest, GatewayError,
};
use readiness_domain::{AnswerSet, PromptBuilder, PromptPair, QuestionBank, ReportExtractor};
use readiness_infrastructure::{HttpCompletionGateway, HttpDeploymentGateway};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn prompt() -> PromptPair {
    PromptPair {
        system_prompt: "system text".to_string(),
        user_prompt: "user text".to_string(),
    }
}

fn gateway(server: &MockServer, token: Option<&str>) -> HttpCompletionGateway {
    HttpCompletionGateway::new(
        &server.uri(),
        CompletionParams::default(),
        token.map(str::to_string),
    )
    .expect("failed to create gateway")
}

#[tokio::test]
async fn test_complete_sends_expected_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "model": "gpt-5",
            "messages": [
                {"role": "system", "content": "system text"},
                {"role": "user", "content": "user text"}
            ],
            "temperature": 0.7,
            "max_tokens": 2500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "OK"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server, Some("test-token"))
        .complete(&prompt())
        .await
        .expect("complete failed");

    assert_eq!(ReportExtractor::extract(response).unwrap().as_str(), "OK");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/backend/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpCompletionGateway::new(
        &format!("{}/backend/", server.uri()),
        CompletionParams::default(),
        Some("t".to_string()),
    )
    .unwrap();
    let response = gateway.complete(&prompt()).await.unwrap();
    assert_eq!(response.choices, Some(vec![]));
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = gateway(&server, None).complete(&prompt()).await.unwrap_err();
    assert_eq!(err, GatewayError::MissingCredential);

    let err = gateway(&server, Some("   ")).complete(&prompt()).await.unwrap_err();
    assert_eq!(err, GatewayError::MissingCredential);
}

#[tokio::test]
async fn test_upstream_status_and_body_are_kept() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway(&server, Some("t")).complete(&prompt()).await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::UpstreamError {
            status: 503,
            body: "model overloaded".to_string(),
        }
    );
}

#[tokio::test]
async fn test_unauthorized_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad token"})))
        .mount(&server)
        .await;

    let err = gateway(&server, Some("t")).complete(&prompt()).await.unwrap_err();
    assert_eq!(err.upstream_status(), Some(401));
    match err {
        GatewayError::UpstreamError { body, .. } => assert!(body.contains("bad token")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = gateway(&server, Some("t")).complete(&prompt()).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidBody(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": []}))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let gateway = HttpCompletionGateway::new(
        &server.uri(),
        CompletionParams::default().with_timeout(Duration::from_millis(200)),
        Some("t".to_string()),
    )
    .unwrap();

    let err = gateway.complete(&prompt()).await.unwrap_err();
    assert!(matches!(err, GatewayError::TransportFailure(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let gateway = HttpCompletionGateway::new(
        "http://127.0.0.1:1",
        CompletionParams::default().with_timeout(Duration::from_secs(5)),
        Some("t".to_string()),
    )
    .unwrap();
    let err = gateway.complete(&prompt()).await.unwrap_err();
    assert!(matches!(err, GatewayError::TransportFailure(_)), "got {err:?}");
}

#[tokio::test]
async fn test_real_prompt_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "## Overall Score\n\n80"}}]
        })))
        .mount(&server)
        .await;

    let bank = QuestionBank::canonical();
    let answers: AnswerSet = (1..=10).map(|i| (format!("Q{i}"), "C")).collect();
    let prompt = PromptBuilder::new(&bank).build(&answers);

    let response = gateway(&server, Some("t")).complete(&prompt).await.unwrap();
    let report = ReportExtractor::extract(response).unwrap();
    assert!(report.as_str().starts_with("## Overall Score"));

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["messages"][1]["content"], prompt.user_prompt);
}

#[tokio::test]
async fn test_deploy_posts_repo_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/deployments"))
        .and(header("authorization", "Bearer deploy-token"))
        .and(body_json(json!({
            "service_name": "ai-readiness",
            "repo_url": "https://github.com/grapeot/ai_readiness_survey",
            "branch": "master",
            "port": 8000
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"status": "queued"})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpDeploymentGateway::new(
        &server.uri(),
        Some("deploy-token".to_string()),
        Duration::from_secs(30),
    )
    .unwrap();
    let request = DeploymentRequest {
        service_name: "ai-readiness".to_string(),
        repo_url: "https://github.com/grapeot/ai_readiness_survey".to_string(),
        branch: "master".to_string(),
        port: 8000,
    };

    let reply = gateway.deploy(&request).await.unwrap();
    assert_eq!(reply, json!({"status": "queued"}));
}

#[tokio::test]
async fn test_deploy_without_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = HttpDeploymentGateway::new(&server.uri(), None, Duration::from_secs(30)).unwrap();
    let request = DeploymentRequest {
        service_name: "s".to_string(),
        repo_url: "r".to_string(),
        branch: "b".to_string(),
        port: 1,
    };
    assert_eq!(
        gateway.deploy(&request).await.unwrap_err(),
        GatewayError::MissingCredential
    );
}
