// Chat client
// Runs one full send: local bookkeeping, gateway round trip, reply handling

use crate::chat::gateway_client::GatewayClient;
use crate::chat::session::{ChatSession, SendRejected};

/// A chat session bound to a gateway
///
/// Library-level API for callers that can await a whole exchange, such as
/// headless tools and tests. The desktop shell cannot hold the session across
/// frames, so it drives [`ChatSession::begin_send`] and
/// [`ChatSession::complete_send`] itself around the same [`GatewayClient`].
#[derive(Debug, Clone)]
pub struct ChatClient {
    session: ChatSession,
    gateway: GatewayClient,
}

impl ChatClient {
    /// Create a client for an existing session
    pub fn new(session: ChatSession, gateway: GatewayClient) -> Self {
        Self { session, gateway }
    }

    /// Read access to the session state
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Mutable access to the session state
    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    /// Send `content` and wait for the reply
    ///
    /// Whatever the gateway does, the session ends this call with one
    /// assistant message appended and the busy flag released.
    ///
    /// # Errors
    /// * `SendRejected` when the session refuses to start the send; no
    ///   request is made in that case
    pub async fn send(&mut self, content: &str) -> Result<(), SendRejected> {
        let pending = self.session.begin_send(content)?;
        let outcome = self.gateway.chat(&pending.request).await;
        self.session.complete_send(pending, outcome);
        Ok(())
    }
}
