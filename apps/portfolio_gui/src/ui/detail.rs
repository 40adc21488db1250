//! Project detail overlay. Clicking the backdrop or pressing Escape closes it.

use eframe::egui::{self, RichText};

use crate::{
    controller::{events::UiEvent, orchestration::Outbox, reducer::PageControllers},
    ui::{
        sections::technology_tags,
        theme::{category_color, MUTED, TEXT},
    },
};

const DETAIL_WIDTH: f32 = 560.0;

pub fn show_project_detail(ctx: &egui::Context, page: &PageControllers, outbox: &mut Outbox<'_>) {
    let Some(item) = page.gallery().selected_item() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new(("project_detail", item.id.0))).show(ctx, |ui| {
        ui.set_max_width(DETAIL_WIDTH);
        ui.horizontal(|ui| {
            ui.heading(RichText::new(&item.title).color(TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close").clicked() {
                    outbox.send(UiEvent::CloseDetail);
                }
            });
        });
        ui.add_space(8.0);

        let (cover, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 200.0),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(cover, 8.0, category_color(item.category).gamma_multiply(0.4));
        ui.painter().text(
            cover.center(),
            egui::Align2::CENTER_CENTER,
            item.category.label(),
            egui::FontId::proportional(22.0),
            TEXT,
        );
        ui.label(RichText::new(&item.image_ref).small().color(MUTED));
        ui.add_space(12.0);

        ui.label(RichText::new(&item.description).size(16.0).color(TEXT));
        ui.add_space(8.0);
        technology_tags(ui, &item.technologies);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if let Some(url) = &item.live_link {
                ui.hyperlink_to("Live demo", url);
            }
            if let Some(url) = &item.source_link {
                ui.hyperlink_to("Source", url);
            }
        });
    });

    if modal.should_close() {
        outbox.send(UiEvent::CloseDetail);
    }
}
