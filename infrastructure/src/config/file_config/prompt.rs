//! Prompt configuration from TOML (`[prompt]` section)

use readiness_domain::AnswerFormat;
use serde::{Deserialize, Serialize};

/// Raw prompt construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// `detailed` (default) embeds question and option wording; `compact`
    /// sends only question id → option key.
    pub answer_format: AnswerFormat,
}
