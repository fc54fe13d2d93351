//! Full-screen password prompt shown until the site is unlocked.

use egui::{self, RichText, Vec2};

use crate::state::UiState;
use crate::theme::*;

/// Render the gate. Returns the entered password when submitted.
pub fn gate_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);

        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(PANEL_PADDING * 2.0)
            .show(ui, |ui| {
                ui.set_max_width(320.0);
                ui.heading(RichText::new("Geschützter Bereich").color(TEXT_PRIMARY).strong());
                ui.label(
                    RichText::new("Bitte gib das Passwort ein, um fortzufahren.")
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(8.0);

                let input = egui::TextEdit::singleline(&mut state.password_input)
                    .password(true)
                    .hint_text("Passwort")
                    .desired_width(f32::INFINITY);
                let response = ui.add_enabled(!state.gate_checking, input);

                if let Some(error) = &state.gate_error {
                    ui.label(RichText::new(error).color(ERROR).small());
                }

                ui.add_space(8.0);
                let button_text = if state.gate_checking { "Prüfe..." } else { "Entsperren" };
                let unlock_btn = ui.add_enabled(
                    !state.gate_checking,
                    egui::Button::new(RichText::new(button_text).color(TEXT_PRIMARY))
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 0.0)),
                );

                // The password is passed on as typed, never trimmed.
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if !state.gate_checking && (enter || unlock_btn.clicked()) {
                    state.gate_checking = true;
                    state.gate_error = None;
                    submitted = Some(state.password_input.clone());
                }
            });
    });

    submitted
}
