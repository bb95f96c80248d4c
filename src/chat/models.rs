// Chat data models
// Display-only message log entries and the gateway wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display and request language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
}

impl Language {
    /// Parse a language tag, falling back to English for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }

    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// Label shown on the language selector
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
        }
    }
}

/// A single entry in the local conversation log
///
/// Never persisted; the log lives as long as the chat view does.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Message text
    pub content: String,
    /// True for messages typed by the user
    pub is_user: bool,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Set when the user's text matched an emergency keyword
    pub is_emergency: bool,
}

impl ChatMessage {
    /// Create a message authored by the user
    pub fn user(content: impl Into<String>, is_emergency: bool) -> Self {
        Self::new(content.into(), true, is_emergency)
    }

    /// Create a message authored by the assistant
    pub fn assistant(content: impl Into<String>, is_emergency: bool) -> Self {
        Self::new(content.into(), false, is_emergency)
    }

    fn new(content: String, is_user: bool, is_emergency: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            is_user,
            timestamp: Utc::now(),
            is_emergency,
        }
    }
}

/// Body posted to the chat gateway
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Latest user message only; no history is sent
    pub message: String,
    /// Language the reply should be written in
    pub language: Language,
}

/// Successful gateway payload
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    /// Completion text
    pub response: String,
}

/// Error gateway payload
#[derive(Debug, Deserialize)]
pub struct ErrorReply {
    /// Human readable failure description
    pub error: String,
}
