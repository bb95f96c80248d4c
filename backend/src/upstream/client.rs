//! Completion provider client
//!
//! Direct HTTP client for the hosted chat-completion endpoint. One shared
//! `reqwest::Client` is reused across requests for connection pooling; no
//! other state is kept between calls.

use crate::config::UpstreamConfig;
use crate::error::GatewayError;
use crate::upstream::types::{ChatCompletionRequest, ChatCompletionResponse};
use anyhow::anyhow;

/// Client for the completion provider
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl CompletionClient {
    /// Create a client with a fresh connection pool
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client sharing an existing connection pool
    pub fn with_http_client(http: reqwest::Client, config: UpstreamConfig) -> Self {
        Self { http, config }
    }

    /// Whether a credential is available
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Ask the provider to answer `user_message` under `system_prompt`
    ///
    /// # Returns
    /// * `Ok(String)` - The completion text of the first choice
    /// * `Err(GatewayError)` - Classified failure
    ///
    /// # Errors
    /// * `Configuration` if no credential is set; no request is sent
    /// * `RateLimited` / `ServiceUnavailable` for upstream 429 / 402
    /// * `Upstream` for any other non-success status
    /// * `MalformedResponse` if a 2xx body carries no completion text
    /// * `Internal` if the request could not be sent or the body not read
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, GatewayError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration("AI_GATEWAY_API_KEY is not configured".to_string())
        })?;

        let url = self.endpoint();
        let request_body =
            ChatCompletionRequest::two_turn(&self.config.model, system_prompt, user_message);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            message_len = user_message.len(),
            "Calling completion provider"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send request to AI service: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "AI gateway error"
            );

            return Err(match status_code {
                429 => GatewayError::RateLimited,
                402 => GatewayError::ServiceUnavailable,
                _ => GatewayError::Upstream {
                    status: status_code,
                },
            });
        }

        let response_body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body from AI service: {}", e))?;

        let parsed: ChatCompletionResponse = serde_json::from_str(&response_body)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let text = parsed.completion_text().ok_or_else(|| {
            GatewayError::MalformedResponse("response contains no completion text".to_string())
        })?;

        tracing::debug!(
            response_len = text.len(),
            "Successfully received completion"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(base_url: &str, api_key: Option<&str>) -> CompletionClient {
        CompletionClient::new(UpstreamConfig::new(
            api_key.map(str::to_string),
            base_url,
        ))
    }

    #[tokio::test]
    async fn test_complete_without_api_key_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server.url(), None);
        assert!(!client.is_configured());
        let result = client.complete("system", "hello").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": crate::config::DEFAULT_MODEL,
                "stream": false,
                "messages": [
                    {"role": "system", "content": "system prompt"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("test-key"));
        let result = client.complete("system prompt", "hello").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Hi there");
    }

    #[tokio::test]
    async fn test_complete_trailing_slash_in_base_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create_async()
            .await;

        let client = client_for(&format!("{}/", server.url()), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_complete_rate_limit() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error": "Rate limit exceeded"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(GatewayError::RateLimited)));
    }

    #[tokio::test]
    async fn test_complete_payment_required() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(402)
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(GatewayError::ServiceUnavailable)));
    }

    #[tokio::test]
    async fn test_complete_other_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(GatewayError::Upstream { status: 503 })
        ));
    }

    #[tokio::test]
    async fn test_complete_invalid_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_complete_missing_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let client = client_for(&server.url(), Some("k"));
        let result = client.complete("s", "u").await;

        mock.assert_async().await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no completion text"));
    }

    #[tokio::test]
    async fn test_complete_unreachable_host() {
        // Port 9 (discard) on localhost is not expected to accept connections
        let client = client_for("http://127.0.0.1:9", Some("k"));
        let result = client.complete("s", "u").await;

        let err = result.unwrap_err();
        assert!(matches!(err, GatewayError::Internal(_)));
        assert!(err.to_string().contains("Failed to send request"));
    }
}
