// Chat gateway client
// Posts one ChatRequest to the gateway and decodes the reply

use crate::chat::models::{ChatReply, ChatRequest, ErrorReply};
use thiserror::Error;

/// Ways a gateway round trip can fail
///
/// The chat session treats all of them the same way; the distinction only
/// feeds the error notification and the logs.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never got an HTTP response
    #[error("Failed to reach the chat gateway: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success status
    #[error("Chat gateway returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The gateway's `error` field, or the raw body
        message: String,
    },

    /// A success status with a body that is not `{"response": string}`
    #[error("Malformed chat gateway response: {0}")]
    MalformedResponse(String),
}

/// HTTP client for the chat gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Gateway URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message and return the assistant's reply text
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ClientError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            language = ?request.language,
            message_len = request.message.len(),
            "Sending chat request"
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorReply>(&body)
                .map(|reply| reply.error)
                .unwrap_or(body);
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                "Chat gateway returned error status"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatReply = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        Ok(reply.response)
    }
}
