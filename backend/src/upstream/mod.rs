//! Completion provider integration
//!
//! Typed request/response structs for the provider's chat-completion API and
//! the HTTP client that calls it.

pub mod client;
pub mod types;

pub use client::CompletionClient;
