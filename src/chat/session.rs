// Chat session state
// Conversation log, busy flag and pending notifications for one chat view

use crate::chat::canned;
use crate::chat::emergency::detect_emergency;
use crate::chat::gateway_client::ClientError;
use crate::chat::models::{ChatMessage, ChatRequest, Language};
use thiserror::Error;

/// Why a send did not start
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// Input was empty after trimming; nothing happens
    #[error("message is blank")]
    Blank,
    /// A previous message is still awaiting its reply
    #[error("a reply is still pending")]
    Busy,
}

/// Kind of user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Emergency keyword detected; points to emergency numbers
    EmergencyAlert,
    /// The gateway round trip failed
    Error,
}

/// A toast or alert the shell should display
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Kind of notification
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: String,
}

/// A request that has been accepted and must be completed exactly once with
/// [`ChatSession::complete_send`]
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    /// Request to dispatch to the gateway
    pub request: ChatRequest,
    /// Emergency tag of the user message, copied onto the reply
    pub is_emergency: bool,
    /// Conversation the send belongs to
    pub epoch: u64,
}

/// State of one chat view
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    language: Language,
    busy: bool,
    epoch: u64,
    notifications: Vec<Notification>,
}

impl ChatSession {
    /// Create a session seeded with the welcome message
    pub fn new(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(
                canned::welcome_message(language),
                false,
            )],
            language,
            busy: false,
            epoch: 0,
            notifications: Vec::new(),
        }
    }

    /// Messages in insertion order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Active language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether a reply is being awaited
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Switch language and restart the conversation with a fresh welcome
    ///
    /// A send still in flight belongs to the old conversation; its outcome
    /// is discarded when it completes and the new conversation is not busy.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.language = language;
        self.epoch += 1;
        self.busy = false;
        self.messages = vec![ChatMessage::assistant(
            canned::welcome_message(language),
            false,
        )];
    }

    /// Notifications not yet displayed
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain pending notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Start sending `content`
    ///
    /// On success the user message is already in the log and the session is
    /// busy until the returned [`PendingSend`] is completed.
    ///
    /// # Errors
    /// * `Blank` - content is empty after trimming (no state change)
    /// * `Busy` - a previous send has not completed (no state change)
    pub fn begin_send(&mut self, content: &str) -> Result<PendingSend, SendRejected> {
        if content.trim().is_empty() {
            return Err(SendRejected::Blank);
        }
        if self.busy {
            return Err(SendRejected::Busy);
        }

        let is_emergency = detect_emergency(content);
        self.messages.push(ChatMessage::user(content, is_emergency));
        self.busy = true;

        Ok(PendingSend {
            request: ChatRequest {
                message: content.to_string(),
                language: self.language,
            },
            is_emergency,
            epoch: self.epoch,
        })
    }

    /// Finish a send with the gateway outcome
    ///
    /// Appends exactly one assistant message (the reply, or the fallback
    /// guidance on failure) and always releases the busy flag. An outcome for
    /// a conversation that has since been restarted is dropped unchanged.
    pub fn complete_send(&mut self, pending: PendingSend, outcome: Result<String, ClientError>) {
        if pending.epoch != self.epoch {
            tracing::debug!(
                succeeded = outcome.is_ok(),
                "Dropping reply for a restarted conversation"
            );
            return;
        }
        let language = pending.request.language;

        match outcome {
            Ok(reply) => {
                self.messages
                    .push(ChatMessage::assistant(reply, pending.is_emergency));
            }
            Err(err) => {
                tracing::error!(error = %err, "Chat request failed, showing fallback guidance");
                self.messages.push(ChatMessage::assistant(
                    canned::fallback_message(language),
                    pending.is_emergency,
                ));
                self.notifications.push(Notification {
                    kind: NotificationKind::Error,
                    title: "Error".to_string(),
                    description: canned::SEND_FAILED.to_string(),
                });
            }
        }

        if pending.is_emergency {
            let (title, description) = canned::emergency_alert(language);
            self.notifications.push(Notification {
                kind: NotificationKind::EmergencyAlert,
                title: title.to_string(),
                description: description.to_string(),
            });
        }

        self.busy = false;
    }
}
