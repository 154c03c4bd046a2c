//! Prompt construction from the question bank and a caller's answers

use super::template::AssessmentPromptTemplate;
use crate::core::answer::AnswerSet;
use crate::core::question_bank::QuestionBank;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Placeholder for a question the caller skipped
pub const NO_SELECTION: &str = "no selection";

/// Placeholder for an option key the question does not define
pub const UNKNOWN_OPTION: &str = "unrecognized option";

/// System/user message pair sent to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// How answers are embedded in the user prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerFormat {
    /// Question id → option key, exactly as submitted
    Compact,
    /// Every question with its wording, all options, and the selection
    #[default]
    Detailed,
}

/// Builds the [`PromptPair`] for one analysis request.
///
/// Never fails: missing selections are rendered as [`NO_SELECTION`], and
/// ids or keys that do not exist in the bank are carried through. Output is
/// a pure function of the bank, the format, and the answers.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    bank: &'a QuestionBank,
    format: AnswerFormat,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            format: AnswerFormat::default(),
        }
    }

    pub fn with_format(mut self, format: AnswerFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(&self, answers: &AnswerSet) -> PromptPair {
        let serialized = match self.format {
            AnswerFormat::Compact => self.compact(answers),
            AnswerFormat::Detailed => self.detailed(answers),
        };

        PromptPair {
            system_prompt: AssessmentPromptTemplate::system().to_string(),
            user_prompt: AssessmentPromptTemplate::user(&serialized),
        }
    }

    fn compact(&self, answers: &AnswerSet) -> String {
        let map: Map<String, Value> = answers
            .iter()
            .map(|(id, key)| (id.to_string(), Value::from(key)))
            .collect();
        format!("{:#}", Value::Object(map))
    }

    fn detailed(&self, answers: &AnswerSet) -> String {
        let questions: Vec<Value> = self
            .bank
            .questions()
            .iter()
            .map(|question| {
                let selected = answers.get(question.id());
                let selected_text = match selected {
                    Some(key) => question.option_text(key).unwrap_or(UNKNOWN_OPTION),
                    None => NO_SELECTION,
                };
                json!({
                    "id": question.id(),
                    "question": question.text(),
                    "options": question.options(),
                    "selected": selected,
                    "selected_text": selected_text,
                })
            })
            .collect();

        let mut out = format!("{:#}", Value::Array(questions));

        let unrecognized: Map<String, Value> = answers
            .iter()
            .filter(|(id, _)| !self.bank.contains(id))
            .map(|(id, key)| (id.to_string(), Value::from(key)))
            .collect();
        if !unrecognized.is_empty() {
            out.push_str("\n\nAnswers that match no survey question:\n");
            out.push_str(&format!("{:#}", Value::Object(unrecognized)));
        }

        out
    }
}
