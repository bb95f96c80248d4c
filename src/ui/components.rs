// Reusable UI components
// Badges, call links, chat bubbles and notification rows

use chrono::Local;
use eframe::egui;
use safety_assistant::chat::{ChatMessage, Notification, NotificationKind};

/// Accent used for user bubbles and primary buttons
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(124, 58, 237);
/// Emergency red
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
/// Warning orange
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(234, 88, 12);

/// Render short tags as a row of small, weak labels
pub fn feature_badges(ui: &mut egui::Ui, features: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for feature in features {
            ui.label(egui::RichText::new(format!("[{}]", feature)).small().weak());
        }
    });
}

/// Render a `tel:` link for a phone number
pub fn call_link(ui: &mut egui::Ui, number: &str) -> egui::Response {
    ui.hyperlink_to(format!("📞 {}", number), format!("tel:{}", number))
}

/// Render a card heading
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).heading().strong());
    ui.add_space(4.0);
}

/// Render one chat message, user messages right-aligned
pub fn chat_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let layout = if message.is_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let (fill, text_color) = if message.is_user {
        (ACCENT, egui::Color32::WHITE)
    } else {
        (ui.visuals().faint_bg_color, ui.visuals().text_color())
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_max_width(280.0);
                ui.vertical(|ui| {
                    if message.is_emergency {
                        ui.colored_label(DANGER, egui::RichText::new("⚠ Emergency").small().strong());
                    }
                    ui.label(egui::RichText::new(&message.content).color(text_color));
                    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();
                    ui.label(egui::RichText::new(time).small().color(text_color));
                });
            });
    });
    ui.add_space(6.0);
}

/// Render a notification row; returns true when the user dismissed it
pub fn notification_row(ui: &mut egui::Ui, notification: &Notification) -> bool {
    let color = match notification.kind {
        NotificationKind::EmergencyAlert => DANGER,
        NotificationKind::Error => WARNING,
    };
    let mut dismissed = false;
    ui.horizontal(|ui| {
        ui.colored_label(color, egui::RichText::new(&notification.title).strong());
        ui.label(&notification.description);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").clicked() {
                dismissed = true;
            }
            if notification.kind == NotificationKind::EmergencyAlert {
                call_link(ui, "112");
            }
        });
    });
    dismissed
}
