//! Chat-completion response envelope and report extraction

use crate::core::error::ExtractionError;
use serde::{Deserialize, Serialize};

/// Response envelope from the completion endpoint.
///
/// Only `choices[].message.content` is read; everything else the upstream
/// sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Envelope with a single choice carrying `content`
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            choices: Some(vec![Choice {
                message: Some(ChoiceMessage {
                    content: Some(content.into()),
                }),
            }]),
        }
    }
}

/// Free-text evaluation produced by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(String);

impl Report {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pulls the report out of a completion response
pub struct ReportExtractor;

impl ReportExtractor {
    /// Return the first choice's content verbatim.
    ///
    /// No trimming and no length enforcement; the word budget in the prompt
    /// is advisory only.
    pub fn extract(response: CompletionResponse) -> Result<Report, ExtractionError> {
        let choices = response
            .choices
            .ok_or_else(|| ExtractionError::malformed("missing choices"))?;
        let first = choices
            .into_iter()
            .next()
            .ok_or_else(|| ExtractionError::malformed("choices is empty"))?;
        first
            .message
            .and_then(|m| m.content)
            .map(Report)
            .ok_or_else(|| ExtractionError::malformed("first choice has no message content"))
    }
}
