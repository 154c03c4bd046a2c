//! Chat-completion request body

use crate::prompt::PromptPair;
use serde::{Deserialize, Serialize};

/// Model identifier sent with every request
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Sampling temperature sent with every request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token cap sent with every request
pub const DEFAULT_MAX_TOKENS: u32 = 2500;

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of `POST /v1/chat/completions`
///
/// Always carries exactly two messages: the system prompt, then the user
/// prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Request with the default model, temperature and token cap
    pub fn new(prompt: &PromptPair) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: prompt.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.user_prompt.clone(),
                },
            ],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prompt() -> PromptPair {
        PromptPair {
            system_prompt: "sys".to_string(),
            user_prompt: "usr".to_string(),
        }
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(CompletionRequest::new(&prompt())).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-5",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "temperature": 0.7,
                "max_tokens": 2500
            })
        );
    }

    #[test]
    fn test_overrides() {
        let request = CompletionRequest::new(&prompt())
            .with_model("gpt-4.1")
            .with_temperature(0.2)
            .with_max_tokens(100);
        assert_eq!(request.model, "gpt-4.1");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 100);
        assert_eq!(request.messages.len(), 2);
    }
}
