//! Scrollable page body: hero, about with skill bars, filterable projects, and contact.

use std::time::Instant;

use eframe::egui::{self, Rect, RichText};
use shared::domain::{GalleryItem, NavLink, SiteContent, Skill};
use view_core::{skill_fill_fraction, EntranceSchedule};

use crate::{
    controller::{
        events::{Section, UiEvent},
        orchestration::Outbox,
        reducer::PageControllers,
    },
    ui::theme::{card_columns, category_color, ACCENT, CARD_BG, MUTED, PAGE_BG, TEXT},
};

const PORTFOLIO_TARGET: &str = "/portfolio";
const SLIDE_DISTANCE: f32 = 24.0;

/// Read-only inputs for one rendered pass of the page body.
pub struct PageFrame<'a> {
    pub site: &'a SiteContent,
    pub page: &'a PageControllers,
    pub now: Instant,
    pub scroll_to: Option<Section>,
}

impl PageFrame<'_> {
    fn progress(&self, section: Section, schedule: EntranceSchedule, index: usize) -> f32 {
        self.page
            .reveal_elapsed(section, self.now)
            .map_or(0.0, |elapsed| schedule.progress(elapsed, index))
    }
}

pub fn show_page(ctx: &egui::Context, frame: &PageFrame<'_>, outbox: &mut Outbox<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(PAGE_BG))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .enable_scrolling(!frame.page.is_scroll_locked())
                .show(ui, |ui| {
                    section_block(ui, frame, Section::Hero, outbox, |ui, outbox| {
                        show_hero(ui, frame, outbox)
                    });
                    section_block(ui, frame, Section::About, outbox, |ui, _| {
                        show_about(ui, frame)
                    });
                    section_block(ui, frame, Section::Projects, outbox, |ui, outbox| {
                        show_projects(ui, frame, outbox)
                    });
                    section_block(ui, frame, Section::Contact, outbox, |ui, outbox| {
                        show_contact(ui, frame, outbox)
                    });
                });
        });
}

/// Lays out one section and reports how much of it the scroll viewport shows
/// while its visibility controller is still observing.
fn section_block<'o>(
    ui: &mut egui::Ui,
    frame: &PageFrame<'_>,
    section: Section,
    outbox: &mut Outbox<'o>,
    add_contents: impl FnOnce(&mut egui::Ui, &mut Outbox<'o>),
) {
    let response = egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(32, 40))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui, outbox);
        })
        .response;

    if frame.scroll_to == Some(section) {
        response.scroll_to_me(Some(egui::Align::Min));
    }

    if frame.page.visibility(section).is_observing() {
        let visible_fraction = visible_fraction(response.rect, ui.clip_rect());
        if visible_fraction > 0.0 {
            outbox.send(UiEvent::SectionIntersected {
                section,
                visible_fraction,
            });
        }
    }
}

/// Share of `rect`'s height inside `clip`, in `[0, 1]`.
pub fn visible_fraction(rect: Rect, clip: Rect) -> f32 {
    if rect.height() <= 0.0 || !rect.intersects(clip) {
        return 0.0;
    }
    let overlap = rect.intersect(clip);
    (overlap.height() / rect.height()).clamp(0.0, 1.0)
}

/// Fades and slides `add_contents` in as `progress` goes from 0 to 1.
fn entrance(ui: &mut egui::Ui, progress: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.scope(|ui| {
        ui.set_opacity(progress);
        ui.add_space((1.0 - progress) * SLIDE_DISTANCE);
        add_contents(ui);
    });
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(30.0).strong().color(TEXT));
    let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 4.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, ACCENT);
    ui.add_space(20.0);
}

fn show_hero(ui: &mut egui::Ui, frame: &PageFrame<'_>, outbox: &mut Outbox<'_>) {
    let profile = &frame.site.profile;
    let progress = frame.progress(Section::Hero, EntranceSchedule::HERO, 0);
    entrance(ui, progress, |ui| {
        ui.add_space(48.0);
        ui.label(RichText::new(&profile.greeting).size(20.0).color(MUTED));
        ui.label(
            RichText::new(profile.display_name())
                .size(52.0)
                .strong()
                .color(TEXT),
        );
        ui.label(RichText::new(&profile.headline).size(26.0).color(ACCENT));
        ui.add_space(24.0);
        ui.label(RichText::new(&profile.hero_title).size(18.0).color(MUTED));
        ui.add_space(8.0);
        let cta = egui::Button::new(RichText::new(&profile.hero_cta).size(16.0).color(TEXT))
            .fill(ACCENT)
            .min_size(egui::vec2(160.0, 40.0));
        if ui.add(cta).clicked() {
            outbox.send(cta_event(frame.site, &profile.hero_cta));
        }
        ui.add_space(48.0);
    });
}

/// The hero call to action selects the menu link pointing at the projects,
/// when the menu has one.
fn cta_event(site: &SiteContent, label: &str) -> UiEvent {
    match find_link_by_target(site, PORTFOLIO_TARGET) {
        Some(link) => UiEvent::SelectLink {
            name: link.name.clone(),
            target: link.target.clone(),
        },
        None => UiEvent::Placeholder {
            label: label.to_string(),
            target: PORTFOLIO_TARGET.to_string(),
        },
    }
}

fn find_link_by_target<'a>(site: &'a SiteContent, target: &str) -> Option<&'a NavLink> {
    site.menu
        .iter()
        .flat_map(|page| page.items.iter())
        .find(|link| link.target == target)
}

fn show_about(ui: &mut egui::Ui, frame: &PageFrame<'_>) {
    let revealed = frame.page.is_revealed(Section::About);
    let heading_progress = frame.progress(Section::About, EntranceSchedule::HERO, 0);
    entrance(ui, heading_progress, |ui| {
        section_heading(ui, "About Me");
        ui.label(
            RichText::new(&frame.site.profile.bio)
                .size(16.0)
                .color(MUTED),
        );
    });
    ui.add_space(24.0);

    for (index, skill) in frame.site.skills.iter().enumerate() {
        let progress = frame.progress(Section::About, EntranceSchedule::SKILL_BARS, index);
        skill_bar(ui, skill, skill_fill_fraction(skill.level, revealed, progress));
        ui.add_space(12.0);
    }
}

fn skill_bar(ui: &mut egui::Ui, skill: &Skill, fill: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&skill.name).color(TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{}%", skill.level)).color(MUTED));
        });
    });
    let (track, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 10.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(track, 5.0, CARD_BG);
    if fill > 0.0 {
        let filled = Rect::from_min_size(
            track.min,
            egui::vec2(track.width() * fill, track.height()),
        );
        painter.rect_filled(filled, 5.0, ACCENT);
    }
}

fn show_projects(ui: &mut egui::Ui, frame: &PageFrame<'_>, outbox: &mut Outbox<'_>) {
    let gallery = frame.page.gallery();
    section_heading(ui, "My Projects");

    ui.horizontal_wrapped(|ui| {
        for option in gallery.filter_options() {
            let active = option.key == gallery.active_filter();
            let text = RichText::new(&option.label).color(if active { TEXT } else { MUTED });
            let button = egui::Button::new(text)
                .selected(active)
                .fill(if active { ACCENT } else { CARD_BG });
            if ui.add(button).clicked() && !active {
                outbox.send(UiEvent::SetFilter(option.key.as_str().to_string()));
            }
        }
    });
    ui.add_space(16.0);

    if gallery.is_empty_result() {
        egui::Frame::NONE
            .fill(CARD_BG)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("No projects in this category yet.").color(MUTED));
            });
        return;
    }

    let items = gallery.visible_items();
    let columns = card_columns(ui.available_width());
    ui.columns(columns, |cols| {
        for (index, item) in items.iter().enumerate() {
            let progress = frame.progress(Section::Projects, EntranceSchedule::PROJECT_CARDS, index);
            project_card(&mut cols[index % columns], item, progress, outbox);
        }
    });
}

fn project_card(ui: &mut egui::Ui, item: &GalleryItem, progress: f32, outbox: &mut Outbox<'_>) {
    entrance(ui, progress, |ui| {
        egui::Frame::NONE
            .fill(CARD_BG)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let (cover, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 120.0),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();
                painter.rect_filled(cover, 6.0, category_color(item.category).gamma_multiply(0.4));
                painter.text(
                    cover.center(),
                    egui::Align2::CENTER_CENTER,
                    item.category.label(),
                    egui::FontId::proportional(18.0),
                    TEXT,
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&item.title).size(18.0).strong().color(TEXT));
                    if item.featured {
                        ui.label(RichText::new("★ Featured").small().color(ACCENT));
                    }
                });
                ui.label(RichText::new(&item.description).color(MUTED));
                technology_tags(ui, &item.technologies);
                ui.add_space(8.0);
                if ui.button("View details").clicked() {
                    outbox.send(UiEvent::OpenDetail(item.id));
                }
            });
        ui.add_space(12.0);
    });
}

pub fn technology_tags(ui: &mut egui::Ui, technologies: &[String]) {
    if technologies.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for tech in technologies {
            egui::Frame::NONE
                .fill(PAGE_BG)
                .corner_radius(4.0)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(tech).small().color(TEXT));
                });
        }
    });
}

fn show_contact(ui: &mut egui::Ui, frame: &PageFrame<'_>, outbox: &mut Outbox<'_>) {
    let contact = &frame.site.contact;
    let progress = frame.progress(Section::Contact, EntranceSchedule::HERO, 0);
    entrance(ui, progress, |ui| {
        section_heading(ui, &contact.heading);
        ui.label(RichText::new(&contact.blurb).size(16.0).color(MUTED));
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let primary = egui::Button::new(RichText::new(&contact.contact_label).color(TEXT))
                .fill(ACCENT);
            if ui.add(primary).clicked() {
                outbox.send(UiEvent::Placeholder {
                    label: contact.contact_label.clone(),
                    target: contact.contact_target.clone(),
                });
            }
            if ui.button(&contact.cv_label).clicked() {
                outbox.send(UiEvent::Placeholder {
                    label: contact.cv_label.clone(),
                    target: contact.cv_target.clone(),
                });
            }
        });
        ui.add_space(48.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn visible_fraction_measures_overlap_height() {
        let clip = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0));
        let inside = Rect::from_min_size(pos2(0.0, 100.0), vec2(800.0, 200.0));
        let half = Rect::from_min_size(pos2(0.0, 500.0), vec2(800.0, 200.0));
        let below = Rect::from_min_size(pos2(0.0, 900.0), vec2(800.0, 200.0));

        assert_eq!(visible_fraction(inside, clip), 1.0);
        assert!((visible_fraction(half, clip) - 0.5).abs() < 1e-6);
        assert_eq!(visible_fraction(below, clip), 0.0);
        assert_eq!(visible_fraction(Rect::NOTHING, clip), 0.0);
    }

    #[test]
    fn cta_selects_portfolio_link_when_menu_has_one() {
        let mut site = content::builtin_site_content();
        let UiEvent::SelectLink { name, target } = cta_event(&site, "View My Work") else {
            panic!("expected link selection");
        };
        assert_eq!(name, "Portfolio");
        assert_eq!(target, PORTFOLIO_TARGET);

        for page in &mut site.menu {
            page.items.retain(|link| link.target != PORTFOLIO_TARGET);
        }
        assert!(matches!(
            cta_event(&site, "View My Work"),
            UiEvent::Placeholder { .. }
        ));
    }
}
