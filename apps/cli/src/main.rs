mod text;

use std::sync::Arc;

use anyhow::Result;
use catalog_view::{CatalogPage, UiAction, ALL_CATEGORIES};
use clap::Parser;
use client_core::{
    config::normalize_api_url, load_catalog, load_settings, CatalogClient, CatalogStore,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "Print the product catalog")]
struct Args {
    /// Catalog endpoint; overrides catalog.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Raw category label to filter by, or `all`.
    #[arg(long, default_value = ALL_CATEGORIES)]
    category: String,
    /// Open the detail view of the card at this 1-based grid position.
    #[arg(long)]
    show: Option<usize>,
    /// Print the page view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings()?;
    if let Some(api_url) = &args.api_url {
        settings.api_url = normalize_api_url(api_url)?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    for warning in &settings.warnings {
        tracing::warn!("{warning}");
    }

    let store = Arc::new(CatalogStore::new());
    let client = CatalogClient::from_settings(&settings);
    // A failed fetch is already logged; the page below simply stays empty.
    load_catalog(&client, &store).await;

    let mut page = CatalogPage::new(store);
    page.mount();
    page.handle(UiAction::FilterChanged(args.category));

    if let Some(position) = args.show {
        let card = position
            .checked_sub(1)
            .and_then(|index| page.render().cards.get(index).cloned());
        match card {
            Some(card) => {
                page.handle(UiAction::CardActivated(card.product_id));
            }
            None => tracing::warn!(position, "no card at that grid position"),
        }
    }

    let view = page.render();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", text::render_text(&view));
    }

    page.unmount();
    Ok(())
}
