// Client configuration
// Environment variables with defaults; the client holds no provider secrets

use crate::chat::Language;
use std::env;

/// Default gateway endpoint (a locally running gateway)
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8080/";

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// URL the chat requests are posted to
    pub gateway_url: String,
    /// Initial display and request language
    pub language: Language,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            gateway_url: lookup("SAFETY_GATEWAY_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            language: lookup("SAFETY_LANGUAGE")
                .map(|tag| Language::from_tag(&tag))
                .unwrap_or_default(),
        }
    }
}
