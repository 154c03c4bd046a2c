//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: one multiple-choice survey question
//! - [`question_bank::QuestionBank`]: the fixed, ordered catalog of questions
//! - [`answer::AnswerSet`]: the caller's selections, keyed by question id
//! - [`validation::AnswerValidator`]: completeness gate in front of the pipeline
//! - [`error`]: domain-level errors

pub mod answer;
pub mod error;
pub mod question;
pub mod question_bank;
pub mod validation;
