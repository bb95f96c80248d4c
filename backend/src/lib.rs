//! Safety Assistant Chat Gateway
//!
//! A stateless HTTP service that mediates between the safety assistant
//! client and a hosted completion provider. The main binary is in
//! `src/main.rs`; the library exposes the router for testing.

pub mod api;
pub mod config;
pub mod error;
pub mod prompts;
pub mod state;
pub mod upstream;
