//! Cookie consent banner.

use egui::{self, Align, Layout, RichText};

use crate::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentAction {
    None,
    Accept,
    Decline,
}

pub fn consent_banner(ui: &mut egui::Ui) -> ConsentAction {
    let mut action = ConsentAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(
                        "Wir verwenden Cookies, um deine Einstellungen zu speichern. \
                         Du kannst zustimmen oder ablehnen.",
                    )
                    .color(TEXT_PRIMARY),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("Akzeptieren").color(TEXT_PRIMARY)).fill(ACCENT))
                        .clicked()
                    {
                        action = ConsentAction::Accept;
                    }
                    if ui.button("Ablehnen").clicked() {
                        action = ConsentAction::Decline;
                    }
                });
            });
        });

    action
}
