//! Answer completeness check

use super::answer::AnswerSet;
use super::error::ValidationError;
use super::question_bank::QuestionBank;

/// Gate in front of the analysis pipeline.
///
/// Only the number of answers is checked: the set must be non-empty and hold
/// at least [`QuestionBank::required_answers`] entries. Keys and values are
/// not matched against the bank.
#[derive(Debug, Clone, Copy)]
pub struct AnswerValidator<'a> {
    bank: &'a QuestionBank,
}

impl<'a> AnswerValidator<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Pass the answers through unchanged, or reject them as incomplete
    pub fn validate(&self, answers: AnswerSet) -> Result<AnswerSet, ValidationError> {
        let required = self.bank.required_answers();
        if answers.is_empty() || answers.len() < required {
            return Err(ValidationError::IncompleteAnswers {
                answered: answers.len(),
                required,
                total: self.bank.len(),
            });
        }
        Ok(answers)
    }
}
