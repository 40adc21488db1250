//! Side navigation: brand, paged link list, social strip, and the narrow-viewport toggle bar.

use eframe::egui::{self, RichText};
use shared::domain::SiteContent;
use view_core::PagedMenuController;

use crate::{
    controller::{events::UiEvent, orchestration::Outbox, reducer::PageControllers},
    ui::theme::{nav_glyph, ACCENT, MUTED, NAV_WIDTH, PANEL_BG, TEXT},
};

pub fn show_navigation(
    ctx: &egui::Context,
    site: &SiteContent,
    page: &PageControllers,
    outbox: &mut Outbox<'_>,
) {
    let menu = page.menu();

    // A wide, open menu needs no toggle; every other state does.
    if menu.is_narrow() || !menu.is_open() {
        egui::TopBottomPanel::top("nav_toggle_bar")
            .frame(
                egui::Frame::NONE
                    .fill(PANEL_BG)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let glyph = if menu.is_open() { "✕" } else { "☰" };
                    if ui
                        .button(RichText::new(glyph).size(18.0))
                        .on_hover_text("Toggle navigation")
                        .clicked()
                    {
                        outbox.send(UiEvent::ToggleMenu);
                    }
                    ui.label(
                        RichText::new(site.profile.display_name())
                            .size(18.0)
                            .strong()
                            .color(ACCENT),
                    );
                });
            });
    }

    if !menu.is_open() {
        return;
    }

    egui::SidePanel::left("side_navigation")
        .exact_width(NAV_WIDTH)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(PANEL_BG)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(ctx, |ui| {
            egui::TopBottomPanel::bottom("nav_social_strip")
                .frame(egui::Frame::NONE.fill(PANEL_BG))
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for social in &site.social_links {
                            ui.hyperlink_to(
                                RichText::new(nav_glyph(social.icon)).size(16.0),
                                &social.url,
                            )
                            .on_hover_text(social.name.as_str());
                        }
                    });
                    ui.add_space(8.0);
                });

            if !menu.is_narrow() {
                ui.label(
                    RichText::new(site.profile.display_name())
                        .size(24.0)
                        .strong()
                        .color(ACCENT),
                );
                ui.label(RichText::new(&site.profile.headline).color(MUTED));
                ui.add_space(12.0);
            }
            ui.separator();
            show_pager(ui, menu, outbox);
            ui.add_space(8.0);

            for link in &menu.current_page().items {
                let active = menu.is_active(link);
                let text = RichText::new(format!("{}  {}", nav_glyph(link.icon), link.name))
                    .size(16.0)
                    .color(if active { ACCENT } else { TEXT });
                let button = egui::Button::new(text).selected(active).frame(active);
                if ui
                    .add_sized([ui.available_width(), 32.0], button)
                    .on_hover_text(link.target.as_str())
                    .clicked()
                {
                    outbox.send(UiEvent::SelectLink {
                        name: link.name.clone(),
                        target: link.target.clone(),
                    });
                }
            }
        });
}

fn show_pager(ui: &mut egui::Ui, menu: &PagedMenuController, outbox: &mut Outbox<'_>) {
    let paged = menu.page_count() > 1;
    ui.horizontal(|ui| {
        if paged && ui.small_button("◀").on_hover_text("Previous").clicked() {
            outbox.send(UiEvent::PrevMenuPage);
        }
        ui.label(
            RichText::new(&menu.current_page().title)
                .strong()
                .color(MUTED),
        );
        if paged && ui.small_button("▶").on_hover_text("Next").clicked() {
            outbox.send(UiEvent::NextMenuPage);
        }
    });

    if !paged {
        return;
    }
    ui.horizontal(|ui| {
        for index in 0..menu.page_count() {
            let current = index == menu.current_page_index();
            let dot = RichText::new(if current { "●" } else { "○" })
                .color(if current { ACCENT } else { MUTED });
            let response = ui.add(egui::Label::new(dot).sense(egui::Sense::click()));
            if response.clicked() && !current {
                outbox.send(UiEvent::GoToMenuPage(index));
            }
        }
    });
}
