//! Domain error types

use thiserror::Error;

/// Errors raised while checking a submitted answer set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Incomplete answers: {answered} of {total} questions answered, at least {required} required"
    )]
    IncompleteAnswers {
        answered: usize,
        required: usize,
        total: usize,
    },
}

/// Errors raised while reading the completion envelope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),
}

impl ExtractionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ExtractionError::MalformedUpstreamResponse(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_answers_display() {
        let error = ValidationError::IncompleteAnswers {
            answered: 5,
            required: 9,
            total: 10,
        };
        assert_eq!(
            error.to_string(),
            "Incomplete answers: 5 of 10 questions answered, at least 9 required"
        );
    }

    #[test]
    fn test_malformed_display() {
        let error = ExtractionError::malformed("choices is empty");
        assert_eq!(
            error.to_string(),
            "Malformed upstream response: choices is empty"
        );
    }
}
