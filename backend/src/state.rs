//! Shared handler state
//!
//! The gateway keeps no per-request or per-session state. Handlers share
//! only the immutable configuration and the pooled upstream client.

use crate::config::Config;
use crate::upstream::CompletionClient;
use std::sync::Arc;

/// State cloned into every request handler
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Completion provider client
    pub upstream: CompletionClient,
}

impl GatewayState {
    /// Build handler state from configuration
    pub fn new(config: Config) -> Self {
        let upstream = CompletionClient::new(config.upstream.clone());
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
