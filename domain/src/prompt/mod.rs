//! Prompt domain
//!
//! The fixed instructional template and the builder that merges it with the
//! question bank and a caller's answers into a system/user message pair.

mod builder;
mod template;

pub use builder::{AnswerFormat, PromptBuilder, PromptPair};
pub use template::{AssessmentPromptTemplate, FRAMEWORK_TERMS, MAX_REPORT_WORDS, REPORT_SECTIONS};
