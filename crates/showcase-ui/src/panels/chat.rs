//! Demo chat widget — transcript, input field, quota and voice controls.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use showcase_core::orchestrator::ChatState;
use showcase_types::message::ChatMessage;

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    None,
    /// Send this (already trimmed) message
    Submit(String),
    /// The voice toggle was flipped to this value
    SetVoice(bool),
    /// Clear the conversation
    Reset,
}

/// Render the chat widget. Returns the user's action, if any.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> ChatAction {
    let mut action = ChatAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_max_width(WIDGET_MAX_WIDTH);
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Demo-Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .small_button("↺")
                            .on_hover_text("Unterhaltung zurücksetzen")
                            .clicked()
                        {
                            action = ChatAction::Reset;
                        }

                        let mut voice = state.voice_enabled;
                        let label = if state.speaking { "🔊" } else { "🔈" };
                        if ui
                            .toggle_value(&mut voice, label)
                            .on_hover_text("Sprachausgabe")
                            .changed()
                        {
                            state.voice_enabled = voice;
                            action = ChatAction::SetVoice(voice);
                        }
                    });
                });

                ui.horizontal(|ui| {
                    let status_color = if state.is_busy() { WARNING } else { SUCCESS };
                    ui.label(RichText::new(&state.status_text).color(status_color).small());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(quota_label(state));
                    });
                });

                ui.separator();

                // Transcript
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &state.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if state.chat_status == ChatState::Typing {
                            ui.label(RichText::new("● ● ●").color(TEXT_SECONDARY));
                        }
                    });

                ui.add_space(8.0);

                // Input
                ui.horizontal(|ui| {
                    let quota_exhausted = state.quota_exhausted();
                    let hint = if quota_exhausted {
                        "Tageslimit erreicht"
                    } else {
                        "Nachricht eingeben..."
                    };
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text(hint)
                        .interactive(!quota_exhausted)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = state.can_submit();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Senden").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter || send_btn.clicked()) {
                        action = ChatAction::Submit(state.input_text.trim().to_string());
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn quota_label(state: &UiState) -> RichText {
    match state.quota {
        Some(quota) => {
            let color = if quota.is_exhausted() { ERROR } else { TEXT_SECONDARY };
            RichText::new(format!("{}/{} Anfragen übrig", quota.remaining(), quota.limit))
                .color(color)
                .small()
        }
        None => RichText::new("").small(),
    }
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (bg, layout) = if message.is_user() {
        (USER_BUBBLE, Layout::right_to_left(Align::TOP))
    } else if message.is_error {
        (ERROR_BUBBLE, Layout::left_to_right(Align::TOP))
    } else {
        (BOT_BUBBLE, Layout::left_to_right(Align::TOP))
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(WIDGET_MAX_WIDTH * 0.8);
                ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
            });
    });
}
