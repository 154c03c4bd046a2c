//! API routes

use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use readiness_domain::{AnswerSet, Question};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============================================================================
// Survey Routes
// ============================================================================

pub fn survey_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/questions", get(list_questions))
        .route("/api/analyze", post(analyze_answers))
}

async fn list_questions(State(state): State<AppStateArc>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.question_bank().questions().to_vec(),
    })
}

async fn analyze_answers(
    State(state): State<AppStateArc>,
    payload: Result<Json<AnswerSet>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(answers) = payload?;

    let report = state.analyze.execute(answers).await?;

    info!("Returning report");
    Ok(Json(AnalyzeResponse {
        report: report.into_string(),
    }))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
