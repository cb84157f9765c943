mod backend_bridge;
mod controller;
mod ui;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{config::normalize_api_url, load_settings, CatalogClient, CatalogStore};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::CatalogApp;

#[derive(Parser, Debug)]
#[command(name = "catalog-desktop", about = "Browse the product catalog")]
struct Args {
    /// Catalog endpoint; overrides catalog.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings()?;
    if let Some(api_url) = &args.api_url {
        settings.api_url = normalize_api_url(api_url)?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for warning in &settings.warnings {
        tracing::warn!("{warning}");
    }

    let store = Arc::new(CatalogStore::new());
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(
        CatalogClient::from_settings(&settings),
        Arc::clone(&store),
        cmd_rx,
        ui_tx,
    );
    dispatch_backend_command(&cmd_tx, BackendCommand::FetchCatalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Catalog")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Catalog",
        options,
        Box::new(|_cc| Ok(Box::new(CatalogApp::new(cmd_tx, ui_rx, store)))),
    )
    .map_err(|err| anyhow!("desktop ui exited with error: {err}"))
}
