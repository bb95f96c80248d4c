//! Chat-completion wire types
//!
//! Structs that mirror the provider's chat-completion JSON format. The
//! response side is treated as an untrusted schema: every field is optional
//! and extraction fails closed.

use serde::{Deserialize, Serialize};

/// Role of a message in a completion request
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionRole {
    /// Instructions for the model
    System,
    /// End-user text
    User,
}

/// A single message sent to the provider
#[derive(Serialize, Debug, Clone)]
pub struct CompletionMessage {
    /// Who authored the message
    pub role: CompletionRole,
    /// Message text
    pub content: String,
}

/// Request body for `POST /chat/completions`
#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation sent to the model (always system + user here)
    pub messages: Vec<CompletionMessage>,
    /// Always false; replies are read in one piece
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Build the two-message request used for every chat turn
    pub fn two_turn(model: &str, system_prompt: &str, user_message: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                CompletionMessage {
                    role: CompletionRole::System,
                    content: system_prompt.to_string(),
                },
                CompletionMessage {
                    role: CompletionRole::User,
                    content: user_message.to_string(),
                },
            ],
            stream: false,
        }
    }
}

/// Top-level completion response
#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    /// Candidate completions
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One candidate completion
#[derive(Deserialize, Debug)]
pub struct Choice {
    /// The generated message
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    /// Why the model stopped generating (if applicable)
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format, logged only in debug output
    pub finish_reason: Option<String>,
}

/// Message payload of a choice
#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    /// Generated text
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if present and non-blank
    pub fn completion_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
    }
}
