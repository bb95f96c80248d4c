//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The upstream credential only ever lives here, on
//! the server side.

use std::env;
use std::fmt;

/// Default base URL of the hosted completion provider
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";

/// Default model identifier sent with every completion request
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Completion provider configuration
    pub upstream: UpstreamConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Completion provider configuration
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Bearer credential for the provider. `None` means every chat request
    /// fails with a configuration error before any upstream call.
    pub api_key: Option<String>,
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Fixed model identifier
    pub model: String,
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl UpstreamConfig {
    /// Create an upstream configuration pointing at `base_url`
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            upstream: UpstreamConfig {
                // An empty variable counts as unset
                api_key: env::var("AI_GATEWAY_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: env::var("AI_GATEWAY_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
                model: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
        }
    }

    /// Build a configuration for a given upstream, with default server settings
    pub fn with_upstream(upstream: UpstreamConfig) -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                host: "0.0.0.0".to_string(),
            },
            upstream,
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
