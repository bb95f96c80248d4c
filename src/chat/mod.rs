// Chat module
// Local conversation state, emergency detection and the gateway round trip

pub mod canned;
pub mod client;
pub mod emergency;
pub mod gateway_client;
pub mod models;
pub mod session;

pub use client::ChatClient;
pub use emergency::detect_emergency;
pub use gateway_client::{ClientError, GatewayClient};
pub use models::{ChatMessage, ChatRequest, Language};
pub use session::{ChatSession, Notification, NotificationKind, PendingSend, SendRejected};
