// UI module
// Contains layout, components, the chat popup and UI-related functionality

pub mod chat_panel;
pub mod components;
pub mod layout;

pub use layout::render_app_layout;

/// Something the user asked for that the app, not the view, must carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Send the given text to the safety assistant
    SendChat(String),
}
