//! Shared handler state

use readiness_application::AnalyzeAnswersUseCase;
use readiness_domain::QuestionBank;

/// Application state shared across handlers.
///
/// Read-only after startup; handlers never lock. The question listing and
/// answer validation both read the bank owned by the use case.
#[derive(Clone)]
pub struct AppState {
    pub analyze: AnalyzeAnswersUseCase,
}

impl AppState {
    pub fn new(analyze: AnalyzeAnswersUseCase) -> Self {
        Self { analyze }
    }

    pub fn question_bank(&self) -> &QuestionBank {
        self.analyze.question_bank()
    }
}
