//! Palette and glyphs for the portfolio page.

use eframe::egui::{self, Color32};
use shared::domain::{Category, NavIcon};

pub const PAGE_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const PANEL_BG: Color32 = Color32::from_rgb(31, 41, 55);
pub const CARD_BG: Color32 = Color32::from_rgb(55, 65, 81);
pub const ACCENT: Color32 = Color32::from_rgb(239, 68, 68);
pub const TEXT: Color32 = Color32::from_rgb(243, 244, 246);
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175);
pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);

pub const NAV_WIDTH: f32 = 240.0;
pub const CARD_MIN_WIDTH: f32 = 280.0;

pub fn apply_page_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PAGE_BG;
    visuals.window_fill = PANEL_BG;
    visuals.extreme_bg_color = PAGE_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    visuals.selection.stroke.color = TEXT;
    ctx.set_visuals(visuals);
}

pub fn nav_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "🏠",
        NavIcon::User => "👤",
        NavIcon::Resume => "📄",
        NavIcon::Briefcase => "💼",
        NavIcon::Envelope => "✉",
        NavIcon::Facebook => "f",
        NavIcon::Instagram => "ig",
        NavIcon::Linkedin => "in",
        NavIcon::Github => "gh",
        NavIcon::Link => "🔗",
    }
}

pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Web => Color32::from_rgb(59, 130, 246),
        Category::Mobile => Color32::from_rgb(16, 185, 129),
        Category::Data => Color32::from_rgb(168, 85, 247),
        Category::Design => Color32::from_rgb(236, 72, 153),
        Category::Ai => Color32::from_rgb(245, 158, 11),
    }
}

/// Number of card columns that fit `available_width`, between one and three.
pub fn card_columns(available_width: f32) -> usize {
    let fit = (available_width / CARD_MIN_WIDTH).floor();
    if fit.is_finite() {
        (fit as usize).clamp(1, 3)
    } else {
        1
    }
}
