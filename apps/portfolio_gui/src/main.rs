use std::path::PathBuf;

mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use content::{load_settings, load_site_content, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    controller::{events::UiEvent, reducer::PageControllers},
    ui::PortfolioApp,
};

const UI_EVENT_QUEUE_CAPACITY: usize = 1024;

#[derive(Parser, Debug)]
#[command(about = "Render the portfolio page in a native window")]
struct Args {
    /// Content file; defaults to the configured path or the built-in content.
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loaded = load_settings();
    init_tracing(&loaded.settings);
    loaded.log_diagnostics();
    let settings = loaded.settings;

    let content_path = args.content.or_else(|| settings.content_path.clone());
    let site = load_site_content(content_path.as_deref())?;
    let page = PageControllers::mount(&site, &settings, args.width)
        .context("failed to mount portfolio page")?;
    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let title = format!("{} | Portfolio", site.profile.display_name());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(site, page, ui_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
