// State management module
// Handles application state shared by the UI

pub mod app_state;

pub use app_state::{AppState, ChatPanelState, LocationInput, Tab};
