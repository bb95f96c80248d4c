//! Chat endpoint
//!
//! Accepts `{message, language}`, selects the system prompt for the language,
//! forwards a two-message completion request upstream and answers with
//! `{response}` or `{error}`. Nothing is remembered between calls; only the
//! latest user message is ever sent upstream.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::GatewayError;
use crate::prompts::{system_prompt, Language};
use crate::state::GatewayState;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Chat request body as sent by the client
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User text; required and non-blank
    #[serde(default)]
    pub message: Option<String>,
    /// Language tag (`"en"` or `"hi"`); anything else means English
    #[serde(default)]
    pub language: Option<String>,
}

/// Successful chat response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// Completion text
    pub response: String,
}

/// A chat request that passed boundary validation
#[derive(Debug, PartialEq)]
pub struct ValidatedChat {
    /// Non-blank user text
    pub message: String,
    /// Resolved language
    pub language: Language,
}

impl ChatRequest {
    /// Parse and validate a raw request body
    ///
    /// # Errors
    /// * `InvalidRequest` if the body is not JSON of the expected shape, the
    ///   message is missing or blank, or it exceeds [`MAX_MESSAGE_LENGTH`]
    pub fn parse(body: &[u8]) -> Result<ValidatedChat, GatewayError> {
        let request: ChatRequest = serde_json::from_slice(body)
            .map_err(|e| GatewayError::InvalidRequest(format!("malformed body: {}", e)))?;
        request.validate()
    }

    fn validate(self) -> Result<ValidatedChat, GatewayError> {
        let message = self
            .message
            .ok_or_else(|| GatewayError::InvalidRequest("message is required".to_string()))?;
        if message.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "message cannot be empty".to_string(),
            ));
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(GatewayError::InvalidRequest(format!(
                "message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        Ok(ValidatedChat {
            message,
            language: Language::from_tag(self.language.as_deref()),
        })
    }
}

/// POST / - Answer one chat message
pub async fn ai_chat(
    State(state): State<GatewayState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, GatewayError> {
    let chat = ChatRequest::parse(&body).map_err(|e| {
        warn!(error = %e, "Rejected chat request");
        e
    })?;

    info!(
        language = chat.language.as_str(),
        message_len = chat.message.len(),
        "Received chat message"
    );

    let response = state
        .upstream
        .complete(system_prompt(chat.language), &chat.message)
        .await
        .map_err(|e| {
            error!(error = %e, "Chat error");
            e
        })?;

    info!("AI response generated successfully");

    Ok(Json(ChatResponse { response }))
}
