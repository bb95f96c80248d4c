// Chat popup
// Floating button that opens the safety assistant window

use crate::ui::components::{chat_bubble, ACCENT};
use eframe::egui;
use safety_assistant::chat::canned::quick_help_options;
use safety_assistant::chat::{ChatSession, Language};
use safety_assistant::state::AppState;

fn window_title(language: Language) -> &'static str {
    match language {
        Language::En => "Safety Assistant",
        Language::Hi => "सुरक्षा सहायक",
    }
}

fn input_hint(language: Language) -> &'static str {
    match language {
        Language::En => "Type your message...",
        Language::Hi => "अपना संदेश लिखें...",
    }
}

fn disclaimer(language: Language) -> &'static str {
    match language {
        Language::En => "For emergencies call 112 or 1098. Responses are guidance only.",
        Language::Hi => "आपातकाल में 112 या 1098 पर कॉल करें। उत्तर केवल मार्गदर्शन हैं।",
    }
}

/// Render the chat button or window
///
/// Returns text the user submitted, if any. Input is disabled while a reply
/// is pending.
pub fn render_chat_panel(ctx: &egui::Context, state: &mut AppState, chat: &ChatSession) -> Option<String> {
    let language = state.language;

    if !state.chat_panel.open {
        egui::Area::new(egui::Id::new("chat_button"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("💬").size(22.0).color(egui::Color32::WHITE))
                    .fill(ACCENT)
                    .rounding(egui::Rounding::same(24.0));
                if ui.add(button).on_hover_text(window_title(language)).clicked() {
                    state.open_chat();
                }
            });
        return None;
    }

    let busy = chat.is_busy();
    let mut submitted = None;
    let mut open = true;

    egui::Window::new(window_title(language))
        .id(egui::Id::new("chat_window"))
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_size([380.0, 520.0])
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            let history_height = (ui.available_height() - 110.0).max(160.0);
            egui::ScrollArea::vertical()
                .max_height(history_height)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for message in chat.messages() {
                        chat_bubble(ui, message);
                    }
                    if busy {
                        ui.spinner();
                    }
                });

            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for option in quick_help_options(language) {
                    if ui.add_enabled(!busy, egui::Button::new(option.label).small()).clicked() {
                        submitted = Some(option.message.to_string());
                    }
                }
            });

            ui.horizontal(|ui| {
                let input_width = ui.available_width() - 40.0;
                let input = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut state.chat_panel.input)
                        .hint_text(input_hint(language))
                        .desired_width(input_width),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !busy && !state.chat_panel.input.trim().is_empty();
                let send = ui.add_enabled(can_send, egui::Button::new("➤")).clicked();
                if can_send && (send || enter) {
                    submitted = Some(state.chat_panel.input.clone());
                }
            });

            ui.label(egui::RichText::new(disclaimer(language)).small().weak());
        });

    if !open {
        state.close_chat();
    }
    submitted
}
