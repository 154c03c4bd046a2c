//! Completion domain
//!
//! Wire-level shapes of the chat-completion exchange and the extraction of
//! the report text from the response envelope.

pub mod request;
pub mod response;

pub use request::{
    ChatMessage, CompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, Role,
};
pub use response::{Choice, ChoiceMessage, CompletionResponse, Report, ReportExtractor};
