//! Domain layer for ai-readiness
//!
//! This crate contains the survey's business rules and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question bank
//!
//! Ten fixed multiple-choice questions, each with options `A` to `D`. The
//! bank is built once at startup and only ever read.
//!
//! ## Analysis pipeline
//!
//! - **Validation**: an [`AnswerSet`] must cover all questions but one
//! - **Prompt**: answers are merged with the assessment template into a [`PromptPair`]
//! - **Extraction**: the model's reply is pulled out of the [`CompletionResponse`] as a [`Report`]

pub mod completion;
pub mod core;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use completion::{
    ChatMessage, Choice, ChoiceMessage, CompletionRequest, CompletionResponse, Report,
    ReportExtractor, Role,
};
pub use core::{
    answer::AnswerSet,
    error::{ExtractionError, ValidationError},
    question::{OPTION_KEYS, Question},
    question_bank::QuestionBank,
    validation::AnswerValidator,
};
pub use prompt::{AnswerFormat, AssessmentPromptTemplate, PromptBuilder, PromptPair};
