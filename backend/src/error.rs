//! Error types and error handling for the gateway
//!
//! Every failure class of a chat request is represented by [`GatewayError`].
//! All variants convert to an HTTP response with a `{"error": ...}` body, so
//! the browser client always receives a readable payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Gateway-level error types
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request body was not a valid chat request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream credential is not configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream answered 429
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Upstream answered 402
    #[error("Service temporarily unavailable. Please try again later.")]
    ServiceUnavailable,

    /// Upstream answered any other non-success status
    #[error("AI service error")]
    Upstream {
        /// Status code returned by the provider
        status: u16,
    },

    /// Upstream answered 2xx but the payload could not be decoded into a
    /// completion
    #[error("Malformed AI service response: {0}")]
    MalformedResponse(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl GatewayError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::ServiceUnavailable => StatusCode::PAYMENT_REQUIRED,
            GatewayError::Configuration(_)
            | GatewayError::Upstream { .. }
            | GatewayError::MalformedResponse(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
