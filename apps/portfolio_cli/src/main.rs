use std::{fmt::Write as _, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content::{load_settings, load_site_content, render_site_content, Settings};
use shared::domain::{GalleryItem, ItemId, SiteContent};
use tracing_subscriber::EnvFilter;
use view_core::{
    FilterableGalleryController, ObserverRegistry, PagedMenuController, ScrollLock, ViewState,
    VisibilityController, VisibilityTrigger,
};

#[derive(Parser, Debug)]
#[command(about = "Inspect portfolio content and drive its view controllers headlessly")]
struct Cli {
    /// Content file; defaults to the configured path or the built-in content.
    #[arg(long, global = true)]
    content: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print menu pages as the side navigation would page through them.
    Menu {
        #[arg(long)]
        page: Option<usize>,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long)]
        select: Option<String>,
    },
    /// Print the project grid for a filter, optionally opening one detail.
    Gallery {
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long)]
        open: Option<i64>,
        /// Print the resulting view state as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate a content file, or the effective content when omitted.
    Validate { path: Option<PathBuf> },
    /// Print the effective content as TOML.
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_settings();
    init_tracing(&loaded.settings);
    loaded.log_diagnostics();
    let settings = loaded.settings;

    let content_path = cli.content.clone().or_else(|| settings.content_path.clone());

    match cli.command {
        Command::Menu {
            page,
            width,
            select,
        } => {
            let site = load_site_content(content_path.as_deref())?;
            let mut menu =
                PagedMenuController::new(site.menu, settings.nav_breakpoint_px, width)?;
            if let Some(page) = page {
                menu.go_to_page(page)?;
            }
            if let Some(name) = select.as_deref() {
                menu.select_link(name);
            }
            print!("{}", render_menu(&menu, page.is_some()));
        }
        Command::Gallery { filter, open, json } => {
            let site = load_site_content(content_path.as_deref())?;
            let mut session = HeadlessSession::mount(site, &settings)?;
            let resolution = session.gallery.set_filter(&filter);
            if let Some(report) = resolution.degraded_report() {
                eprintln!("{}", report.message);
            }
            if let Some(id) = open {
                session.gallery.open_detail(ItemId(id))?;
            }

            if json {
                let state = session.view_state();
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", render_gallery(&session.gallery));
            }
        }
        Command::Validate { path } => {
            let path = path.or(content_path);
            let site = load_site_content(path.as_deref())?;
            let source = path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in content".to_string());
            println!(
                "{source}: ok ({} menu pages, {} projects, {} skills)",
                site.menu.len(),
                site.projects.len(),
                site.skills.len()
            );
        }
        Command::Dump => {
            let site = load_site_content(content_path.as_deref())?;
            print!("{}", render_site_content(&site)?);
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The three controllers a page mounts, without a renderer.
struct HeadlessSession {
    hero: VisibilityController,
    menu: PagedMenuController,
    gallery: FilterableGalleryController,
    _observers: ObserverRegistry,
}

impl HeadlessSession {
    fn mount(site: SiteContent, settings: &Settings) -> Result<Self> {
        let observers = ObserverRegistry::new();
        let mut hero = VisibilityController::mount("hero", VisibilityTrigger::OnMount, &observers);
        hero.frame_rendered();
        let menu = PagedMenuController::new(
            site.menu,
            settings.nav_breakpoint_px,
            settings.nav_breakpoint_px,
        )
        .context("failed to mount menu")?;
        let gallery = FilterableGalleryController::with_filters(
            site.projects,
            site.filters,
            ScrollLock::new(),
        )
        .context("failed to mount gallery")?;
        tracing::debug!(
            menu_pages = menu.page_count(),
            projects = gallery.catalog().len(),
            "mounted headless session"
        );
        Ok(Self {
            hero,
            menu,
            gallery,
            _observers: observers,
        })
    }

    fn view_state(&self) -> ViewState {
        ViewState::capture(&self.hero, &self.menu, &self.gallery)
    }
}

fn render_menu(menu: &PagedMenuController, single_page: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "menu: {} pages, {} viewport, {:?}",
        menu.page_count(),
        if menu.is_narrow() { "narrow" } else { "wide" },
        menu.mode()
    );
    for (index, page) in menu.pages().iter().enumerate() {
        if single_page && index != menu.current_page_index() {
            continue;
        }
        let _ = writeln!(out, "[{}] {}", index, page.title);
        for link in &page.items {
            let marker = if menu.is_active(link) { '*' } else { ' ' };
            let _ = writeln!(out, "  {marker} {:<12} {}", link.name, link.target);
        }
    }
    out
}

fn render_gallery(gallery: &FilterableGalleryController) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "filter: {} ({} of {} projects)",
        gallery.active_filter(),
        gallery.visible_count(),
        gallery.catalog().len()
    );
    if gallery.is_empty_result() {
        let _ = writeln!(out, "  no projects in this category");
    }
    for item in gallery.visible_items() {
        let _ = writeln!(out, "{}", render_card(item));
    }
    if let Some(item) = gallery.selected_item() {
        let _ = writeln!(out, "\ndetail: {}", item.title);
        let _ = writeln!(out, "  {}", item.description);
        if let Some(link) = &item.live_link {
            let _ = writeln!(out, "  live:   {link}");
        }
        if let Some(link) = &item.source_link {
            let _ = writeln!(out, "  source: {link}");
        }
    }
    out
}

fn render_card(item: &GalleryItem) -> String {
    let featured = if item.featured { " (featured)" } else { "" };
    format!(
        "  #{:<3} {:<22} [{}] {}{}",
        item.id.0,
        item.title,
        item.category,
        item.technologies.join(", "),
        featured
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> HeadlessSession {
        let site = content::builtin_site_content();
        HeadlessSession::mount(site, &Settings::default()).expect("session")
    }

    #[test]
    fn renders_empty_result_distinctly() {
        let mut session = session();
        session.gallery.set_filter("ai");
        let rendered = render_gallery(&session.gallery);
        assert!(rendered.starts_with("filter: ai (0 of 3 projects)"));
        assert!(rendered.contains("no projects in this category"));
    }

    #[test]
    fn renders_selected_detail_after_cards() {
        let mut session = session();
        session.gallery.set_filter("web");
        session.gallery.open_detail(ItemId(1)).expect("open");
        let rendered = render_gallery(&session.gallery);
        assert!(rendered.contains("#1   E-Commerce Website"));
        assert!(rendered.contains("detail: E-Commerce Website"));
        assert!(!rendered.contains("Mobile App UI"));
    }

    #[test]
    fn headless_session_starts_wide_and_visible() {
        let session = session();
        let state = session.view_state();
        assert!(state.is_visible);
        assert!(!state.is_narrow_viewport);
        assert!(state.is_menu_open);
        assert!(!state.is_detail_open);
    }

    #[test]
    fn renders_only_requested_menu_page_with_active_marker() {
        let site = content::builtin_site_content();
        let mut menu = PagedMenuController::new(site.menu, 768.0, 1280.0).expect("menu");
        menu.go_to_page(1).expect("page");
        menu.select_link("Contact");
        let rendered = render_menu(&menu, true);
        assert!(rendered.contains("[1] Work"));
        assert!(!rendered.contains("[0] Main"));
        assert!(rendered.contains("* Contact"));
    }
}
