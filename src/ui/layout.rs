// Main application layout
// Handles the menu bar, tabs, tab contents, notifications and the chat popup

use crate::ui::chat_panel::render_chat_panel;
use crate::ui::components::*;
use crate::ui::UiAction;
use eframe::egui;
use safety_assistant::chat::{ChatSession, Language, Notification};
use safety_assistant::directory::{directions_url, directory, NEARBY_POLICE_STATIONS};
use safety_assistant::report::IncidentKind;
use safety_assistant::state::{AppState, Tab};

/// Render the main application layout
/// Includes menu bar, notifications, tab contents and the chat popup
pub fn render_app_layout(
    ctx: &egui::Context,
    state: &mut AppState,
    chat: &ChatSession,
    notifications: &mut Vec<Notification>,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    render_menu_bar(ctx, state);
    render_notifications(ctx, notifications);

    egui::CentralPanel::default().show(ctx, |ui| {
        render_tab_bar(ui, state);
        ui.separator();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match state.active_tab {
                Tab::Location => render_location_tab(ui, state),
                Tab::Helplines => render_helplines_tab(ui, state.language),
                Tab::Report => render_report_tab(ui, state),
                Tab::Navigation => render_navigation_tab(ui, state),
            });
    });

    if let Some(text) = render_chat_panel(ctx, state, chat) {
        actions.push(UiAction::SendChat(text));
    }
    actions
}

/// Render the top menu bar with the language toggle
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.set_visuals(if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    });
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = state.language.toggled();
                if ui.button(format!("🌐 {}", next.label())).clicked() {
                    let language = state.toggle_language();
                    tracing::info!(language = ?language, "Language changed");
                }
                ui.colored_label(DANGER, egui::RichText::new("SOS").strong());
                call_link(ui, "112");
            });
        });
    });
}

/// Render pending notifications above the content
fn render_notifications(ctx: &egui::Context, notifications: &mut Vec<Notification>) {
    if notifications.is_empty() {
        return;
    }
    egui::TopBottomPanel::top("notifications").show(ctx, |ui| {
        notifications.retain(|notification| !notification_row(ui, notification));
    });
}

fn render_tab_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.title(state.language))
                .clicked()
            {
                state.select_tab(tab);
            }
        }
    });
}

fn render_location_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let hi = state.language == Language::Hi;
    section_heading(ui, if hi { "वर्तमान स्थान" } else { "Current Location" });

    egui::Grid::new("location_form").num_columns(2).show(ui, |ui| {
        ui.label(if hi { "अक्षांश" } else { "Latitude" });
        ui.text_edit_singleline(&mut state.location_input.lat);
        ui.end_row();
        ui.label(if hi { "देशांतर" } else { "Longitude" });
        ui.text_edit_singleline(&mut state.location_input.lng);
        ui.end_row();
    });
    if ui.button(if hi { "स्थान सेट करें" } else { "Set Location" }).clicked() {
        state.apply_location_input();
    }
    if let Some(error) = &state.location_error {
        ui.colored_label(WARNING, error);
    }
    if let Some(position) = state.current_location {
        ui.label(format!("{:.4}, {:.4}", position.lat, position.lng));
        ui.hyperlink_to(
            if hi { "मानचित्र में खोलें" } else { "Open in Maps" },
            directions_url(position, None),
        );
    }

    section_heading(ui, if hi { "नज़दीकी पुलिस स्टेशन" } else { "Nearby Police Stations" });
    for station in &NEARBY_POLICE_STATIONS {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(station.name).strong());
                ui.label(egui::RichText::new(station.distance).weak());
            });
            ui.label(station.address);
            call_link(ui, station.phone);
        });
    }
}

fn render_helplines_tab(ui: &mut egui::Ui, language: Language) {
    for category in directory() {
        section_heading(ui, category.kind.title(language));
        for helpline in category.entries {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(helpline.name).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.hyperlink_to(format!("📞 {}", helpline.number), helpline.tel_url());
                    });
                });
                ui.label(helpline.description);
                feature_badges(ui, helpline.features);
            });
        }
    }
}

fn render_report_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.language;
    let hi = language == Language::Hi;

    ui.horizontal(|ui| {
        ui.colored_label(
            DANGER,
            if hi { "तत्काल खतरे में हैं?" } else { "In immediate danger?" },
        );
        ui.hyperlink_to(if hi { "अभी 112 पर कॉल करें" } else { "Call 112 Now" }, "tel:112");
    });

    section_heading(ui, if hi { "घटना का प्रकार" } else { "Incident Type" });
    for kind in IncidentKind::ALL {
        ui.radio_value(&mut state.report.kind, Some(kind), kind.title(language))
            .on_hover_text(kind.description(language));
    }

    section_heading(ui, if hi { "विवरण" } else { "Description" });
    ui.add(
        egui::TextEdit::multiline(&mut state.report.description)
            .desired_rows(5)
            .desired_width(f32::INFINITY),
    );

    match state.report.location {
        Some(position) => ui.label(format!(
            "{} {:.4}, {:.4}",
            if hi { "स्थान:" } else { "Location:" },
            position.lat,
            position.lng
        )),
        None => ui.label(
            egui::RichText::new(if hi {
                "स्थान टैब में स्थान सेट करें"
            } else {
                "Set your location in the Location tab to attach it"
            })
            .weak(),
        ),
    };

    if ui.button(if hi { "रिपोर्ट जमा करें" } else { "Submit Report" }).clicked() {
        // Outcome is recorded on the state
        let _ = state.submit_report();
    }
    if let Some(error) = &state.report_error {
        ui.colored_label(WARNING, error);
    }
    if let Some(receipt) = &state.last_receipt {
        ui.label(format!(
            "{} {}",
            if hi { "रिपोर्ट जमा हुई। संदर्भ:" } else { "Report submitted. Reference:" },
            receipt.reference
        ));
    }
    ui.label(
        egui::RichText::new(if hi {
            "आपकी रिपोर्ट गोपनीय रखी जाती है।"
        } else {
            "Your report is kept confidential."
        })
        .small()
        .weak(),
    );
}

fn render_navigation_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let language = state.language;
    let hi = language == Language::Hi;
    section_heading(ui, if hi { "सुरक्षित क्षेत्र" } else { "Nearest Safe Zones" });

    let Some(origin) = state.current_location else {
        ui.label(if hi {
            "सुरक्षित क्षेत्र देखने के लिए पहले अपना स्थान सेट करें।"
        } else {
            "Set your location first to see safe zones around you."
        });
        if ui.button(Tab::Location.title(language)).clicked() {
            state.select_tab(Tab::Location);
        }
        return;
    };

    for ranked in state.nearest_zones() {
        let zone = ranked.zone;
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(zone.name).strong());
                ui.label(egui::RichText::new(format!("{:.1} km", ranked.distance_km)).weak());
            });
            ui.label(zone.kind.label(language));
            feature_badges(ui, zone.features);
            ui.horizontal(|ui| {
                ui.hyperlink_to(
                    if hi { "🧭 रास्ता" } else { "🧭 Navigate" },
                    directions_url(origin, Some(zone.position)),
                );
                if let Some(phone) = zone.phone {
                    call_link(ui, phone);
                }
            });
        });
    }
}
