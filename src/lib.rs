//! Safety Assistant client library
//!
//! Everything the desktop shell needs apart from rendering: the chat session
//! and gateway client, the static safety directory, incident reports and the
//! application state. The binary in `src/main.rs` draws it with egui.

pub mod chat;
pub mod config;
pub mod directory;
pub mod report;
/// Application state management
///
/// Active tab, language, chat panel and form state.
pub mod state;
