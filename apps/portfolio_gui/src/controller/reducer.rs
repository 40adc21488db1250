//! Page-level state: one controller per view, and the transitions UI events
//! drive through them.

use std::time::{Duration, Instant};

use content::Settings;
use shared::{domain::SiteContent, error::ViewError};
use tracing::{debug, info};
use view_core::{
    EntranceSchedule, FilterableGalleryController, ObserverRegistry, PagedMenuController,
    ScrollLock, ViewState, VisibilityController, VisibilityTrigger,
};

use crate::controller::events::{Section, StatusNotice, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Unchanged,
    Changed,
    Notice(StatusNotice),
}

impl EventOutcome {
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, EventOutcome::Unchanged)
    }
}

#[derive(Debug)]
struct SectionReveal {
    section: Section,
    visibility: VisibilityController,
    revealed_at: Option<Instant>,
}

pub struct PageControllers {
    observers: ObserverRegistry,
    scroll_lock: ScrollLock,
    sections: Vec<SectionReveal>,
    menu: PagedMenuController,
    gallery: FilterableGalleryController,
    skill_count: usize,
    pending_scroll: Option<Section>,
}

impl PageControllers {
    /// Mounts every view for `site`. The hero reveals after the first
    /// rendered frame; other sections wait for their first intersection.
    pub fn mount(
        site: &SiteContent,
        settings: &Settings,
        initial_width_px: f32,
    ) -> Result<Self, ViewError> {
        let observers = ObserverRegistry::new();
        let scroll_lock = ScrollLock::new();
        let section_trigger = VisibilityTrigger::on_intersect_at(settings.reveal_threshold);

        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let trigger = match section {
                    Section::Hero => VisibilityTrigger::OnMount,
                    _ => section_trigger,
                };
                SectionReveal {
                    section,
                    visibility: VisibilityController::mount(section.anchor(), trigger, &observers),
                    revealed_at: None,
                }
            })
            .collect();

        let menu = PagedMenuController::new(
            site.menu.clone(),
            settings.nav_breakpoint_px,
            initial_width_px,
        )?;
        let gallery = FilterableGalleryController::with_filters(
            site.projects.clone(),
            site.filters.clone(),
            scroll_lock.clone(),
        )?;

        info!(
            menu_pages = menu.page_count(),
            projects = gallery.catalog().len(),
            narrow = menu.is_narrow(),
            "mounted portfolio page"
        );

        Ok(Self {
            observers,
            scroll_lock,
            sections,
            menu,
            gallery,
            skill_count: site.skills.len(),
            pending_scroll: None,
        })
    }

    pub fn menu(&self) -> &PagedMenuController {
        &self.menu
    }

    pub fn gallery(&self) -> &FilterableGalleryController {
        &self.gallery
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn visibility(&self, section: Section) -> &VisibilityController {
        &self.slot(section).visibility
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.slot(section).visibility.is_visible()
    }

    /// Time since `section` flipped to visible, or `None` before the flip.
    pub fn reveal_elapsed(&self, section: Section, now: Instant) -> Option<Duration> {
        self.slot(section)
            .revealed_at
            .map(|at| now.saturating_duration_since(at))
    }

    /// Section a selected nav link asked to scroll to; cleared on read.
    pub fn take_pending_scroll(&mut self) -> Option<Section> {
        self.pending_scroll.take()
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::capture(
            &self.slot(Section::Hero).visibility,
            &self.menu,
            &self.gallery,
        )
    }

    /// True while any revealed section still has entrance motion left.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.sections.iter().any(|slot| {
            slot.revealed_at.is_some_and(|at| {
                now.saturating_duration_since(at) < self.settle_time(slot.section)
            })
        })
    }

    pub fn apply(&mut self, event: UiEvent, now: Instant) -> Result<EventOutcome, ViewError> {
        let outcome = match event {
            UiEvent::FrameRendered => {
                let mut flipped = false;
                for slot in &mut self.sections {
                    if slot.visibility.frame_rendered() {
                        slot.revealed_at = Some(now);
                        flipped = true;
                    }
                }
                changed_if(flipped)
            }
            UiEvent::ViewportResized { width_px } => {
                let before = self.menu.state().clone();
                self.menu.set_viewport_width(width_px);
                changed_if(&before != self.menu.state())
            }
            UiEvent::SectionIntersected {
                section,
                visible_fraction,
            } => {
                let slot = self.slot_mut(section);
                let flipped = slot.visibility.on_intersection(visible_fraction);
                if flipped {
                    slot.revealed_at = Some(now);
                }
                changed_if(flipped)
            }
            UiEvent::ToggleMenu => {
                self.menu.toggle_open();
                EventOutcome::Changed
            }
            UiEvent::SelectLink { name, target } => {
                self.menu.select_link(&name);
                if let Some(index) = self.menu.page_of_link(&name) {
                    self.menu.go_to_page(index)?;
                }
                self.pending_scroll = Section::for_target(&target);
                debug!(link = %name, section = ?self.pending_scroll, "nav link selected");
                EventOutcome::Changed
            }
            UiEvent::NextMenuPage => {
                self.menu.next_page();
                EventOutcome::Changed
            }
            UiEvent::PrevMenuPage => {
                self.menu.prev_page();
                EventOutcome::Changed
            }
            UiEvent::GoToMenuPage(index) => {
                self.menu.go_to_page(index)?;
                EventOutcome::Changed
            }
            UiEvent::SetFilter(key) => {
                let resolution = self.gallery.set_filter(&key);
                match resolution.degraded_report() {
                    Some(report) => EventOutcome::Notice(StatusNotice::from(&report)),
                    None => EventOutcome::Changed,
                }
            }
            UiEvent::OpenDetail(id) => {
                self.gallery.open_detail(id)?;
                EventOutcome::Changed
            }
            UiEvent::CloseDetail => {
                let was_open = self.gallery.is_detail_open();
                self.gallery.close_detail();
                changed_if(was_open)
            }
            UiEvent::Placeholder { label, target } => EventOutcome::Notice(StatusNotice::info(
                format!("{label}: {target} is not part of this page"),
            )),
        };
        Ok(outcome)
    }

    fn settle_time(&self, section: Section) -> Duration {
        match section {
            Section::Hero | Section::Contact => EntranceSchedule::HERO.settled_after(1),
            Section::About => EntranceSchedule::SKILL_BARS.settled_after(self.skill_count),
            Section::Projects => {
                EntranceSchedule::PROJECT_CARDS.settled_after(self.gallery.visible_count())
            }
        }
    }

    fn slot(&self, section: Section) -> &SectionReveal {
        &self.sections[section as usize]
    }

    fn slot_mut(&mut self, section: Section) -> &mut SectionReveal {
        &mut self.sections[section as usize]
    }
}

fn changed_if(changed: bool) -> EventOutcome {
    if changed {
        EventOutcome::Changed
    } else {
        EventOutcome::Unchanged
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
