//! App shell: frame loop, event draining, and the status bar.

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, RichText};
use shared::domain::SiteContent;

use crate::{
    controller::{
        events::{NoticeSeverity, StatusNotice, UiEvent},
        orchestration::Outbox,
        reducer::{EventOutcome, PageControllers},
    },
    ui::{
        detail::show_project_detail,
        nav::show_navigation,
        sections::{show_page, PageFrame},
        theme::{apply_page_visuals, ACCENT, MUTED, PANEL_BG, WARNING},
    },
};

pub struct PortfolioApp {
    site: SiteContent,
    page: PageControllers,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    status: Option<StatusNotice>,
    visuals_applied: bool,
}

impl PortfolioApp {
    pub fn new(
        site: SiteContent,
        page: PageControllers,
        ui_tx: Sender<UiEvent>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            site,
            page,
            ui_tx,
            ui_rx,
            status: None,
            visuals_applied: false,
        }
    }

    /// Applies every queued event in order. Returns `true` when any of them
    /// changed what the next frame shows.
    fn process_ui_events(&mut self, now: Instant) -> bool {
        let mut repaint = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            match self.page.apply(event, now) {
                Ok(EventOutcome::Notice(notice)) => {
                    self.status = Some(notice);
                    repaint = true;
                }
                Ok(outcome) => repaint |= outcome.needs_repaint(),
                Err(err) => {
                    tracing::warn!(error = %err, "ui event rejected");
                    self.status = Some(StatusNotice::from(&err));
                    repaint = true;
                }
            }
        }
        repaint
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.status else {
            return;
        };
        let color = match notice.severity() {
            NoticeSeverity::Info => MUTED,
            NoticeSeverity::Warning => WARNING,
            NoticeSeverity::Error => ACCENT,
        };

        let mut dismissed = false;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::NONE
                    .fill(PANEL_BG)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(notice.message()).color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("Dismiss").clicked();
                    });
                });
            });
        if dismissed {
            self.status = None;
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if !self.visuals_applied {
            apply_page_visuals(ctx);
            self.visuals_applied = true;
        }

        let width_px = ctx.available_rect().width();
        self.show_status_bar(ctx);
        let scroll_to = self.page.take_pending_scroll();

        {
            let Self {
                site,
                page,
                ui_tx,
                status,
                ..
            } = &mut *self;
            let mut outbox = Outbox::new(ui_tx, status);
            outbox.send(UiEvent::ViewportResized { width_px });

            show_navigation(ctx, site, page, &mut outbox);
            let frame = PageFrame {
                site: &*site,
                page: &*page,
                now,
                scroll_to,
            };
            show_page(ctx, &frame, &mut outbox);
            show_project_detail(ctx, page, &mut outbox);

            outbox.send(UiEvent::FrameRendered);
        }

        if self.process_ui_events(now) || self.page.is_animating(now) {
            ctx.request_repaint();
        }
    }
}
