//! Analyze Answers use case
//!
//! Runs the answer-to-report pipeline for one submission:
//! validate → build prompt → complete → extract.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::gateway_error::GatewayError;
use readiness_domain::util::preview;
use readiness_domain::{
    AnswerFormat, AnswerSet, AnswerValidator, ExtractionError, PromptBuilder, QuestionBank,
    Report, ReportExtractor, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while analyzing a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Use case for turning an answer set into a report.
///
/// Holds only shared, read-only state, so a single instance serves any
/// number of concurrent requests.
#[derive(Clone)]
pub struct AnalyzeAnswersUseCase {
    bank: Arc<QuestionBank>,
    gateway: Arc<dyn CompletionGateway>,
    answer_format: AnswerFormat,
}

impl AnalyzeAnswersUseCase {
    pub fn new(bank: Arc<QuestionBank>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            bank,
            gateway,
            answer_format: AnswerFormat::default(),
        }
    }

    pub fn with_answer_format(mut self, format: AnswerFormat) -> Self {
        self.answer_format = format;
        self
    }

    /// The bank this use case validates and prompts against
    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub async fn execute(&self, answers: AnswerSet) -> Result<Report, AnalyzeError> {
        info!("Analyzing submission with {} answers", answers.len());

        let answers = AnswerValidator::new(&self.bank)
            .validate(answers)
            .inspect_err(|e| warn!("Rejected submission: {}", e))?;

        let prompt = PromptBuilder::new(&self.bank)
            .with_format(self.answer_format)
            .build(&answers);
        debug!(
            "Prompt built: system {} chars, user {} chars",
            prompt.system_prompt.len(),
            prompt.user_prompt.len()
        );

        let response = self.gateway.complete(&prompt).await?;

        let report = ReportExtractor::extract(response)
            .inspect_err(|e| warn!("Completion envelope rejected: {}", e))?;

        info!("Report generated ({} chars)", report.as_str().len());
        debug!("Report preview: {}", preview(report.as_str(), 80));
        Ok(report)
    }
}
