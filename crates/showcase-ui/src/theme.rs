//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 41, 59);
pub const BG_SURFACE: Color32 = Color32::from_rgb(51, 65, 85);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
pub const ACCENT: Color32 = Color32::from_rgb(14, 165, 233);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(3, 105, 161);
pub const BOT_BUBBLE: Color32 = BG_SECONDARY;
pub const ERROR_BUBBLE: Color32 = Color32::from_rgb(69, 26, 26);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const WIDGET_MAX_WIDTH: f32 = 420.0;

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_PRIMARY;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
