// Safety Assistant - Main Entry Point
// Native desktop client: safety directory tabs and the chat assistant popup

mod ui;

use eframe::egui;
use safety_assistant::chat::{ChatSession, ClientError, GatewayClient, Notification, PendingSend};
use safety_assistant::config::ClientConfig;
use safety_assistant::state::AppState;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;
use ui::{render_app_layout, UiAction};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Safety Assistant")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Safety Assistant",
        options,
        Box::new(move |_cc| Box::new(SafetyApp::new(&config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the application: {}", e))
}

/// A finished gateway round trip, handed back to the UI thread
type SendOutcome = (PendingSend, Result<String, ClientError>);

/// Main application struct
/// Owns the view state, the chat session and the channel replies arrive on
struct SafetyApp {
    /// Application state (tabs, language, forms)
    state: AppState,
    /// Conversation shown in the chat popup
    chat: ChatSession,
    /// Gateway the chat requests go to
    gateway: GatewayClient,
    /// Runtime the gateway requests run on
    runtime: tokio::runtime::Runtime,
    replies_tx: mpsc::Sender<SendOutcome>,
    replies_rx: mpsc::Receiver<SendOutcome>,
    /// Alerts and errors not yet dismissed
    notifications: Vec<Notification>,
}

impl SafetyApp {
    /// Create a new application instance
    fn new(config: &ClientConfig, runtime: tokio::runtime::Runtime) -> Self {
        let (replies_tx, replies_rx) = mpsc::channel();
        Self {
            state: AppState::new(config.language),
            chat: ChatSession::new(config.language),
            gateway: GatewayClient::new(config.gateway_url.clone()),
            runtime,
            replies_tx,
            replies_rx,
            notifications: Vec::new(),
        }
    }

    /// Start a gateway round trip for `content`
    ///
    /// Blank input and sends while a reply is pending are ignored.
    fn dispatch(&mut self, ctx: &egui::Context, content: &str) {
        let pending = match self.chat.begin_send(content) {
            Ok(pending) => pending,
            Err(rejected) => {
                tracing::debug!(reason = %rejected, "Chat send ignored");
                return;
            }
        };
        self.state.chat_panel.input.clear();

        let gateway = self.gateway.clone();
        let replies = self.replies_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = gateway.chat(&pending.request).await;
            if replies.send((pending, outcome)).is_err() {
                tracing::warn!("Chat reply dropped: application is shutting down");
            }
            ctx.request_repaint();
        });
    }

    /// Apply finished round trips and collect their notifications
    fn drain_replies(&mut self) {
        while let Ok((pending, outcome)) = self.replies_rx.try_recv() {
            self.chat.complete_send(pending, outcome);
        }
        self.notifications.extend(self.chat.take_notifications());
    }

    /// Keep the chat in the language selected in the menu bar
    fn sync_language(&mut self) {
        if self.chat.language() != self.state.language {
            self.chat.set_language(self.state.language);
        }
    }
}

impl eframe::App for SafetyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_replies();
        self.sync_language();

        let actions = render_app_layout(ctx, &mut self.state, &self.chat, &mut self.notifications);
        for action in actions {
            match action {
                UiAction::SendChat(text) => self.dispatch(ctx, &text),
            }
        }
    }
}
