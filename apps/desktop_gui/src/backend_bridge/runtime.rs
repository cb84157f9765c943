//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{load_catalog, CatalogClient, CatalogStore};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::ProductId;

use crate::backend_bridge::commands::{BackendCommand, ThumbnailRequest};
use crate::controller::events::UiEvent;
use crate::ui::thumbnails::decode_thumbnail;

pub fn launch(
    client: CatalogClient,
    store: Arc<CatalogStore>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::CatalogUnavailable);
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(api_url = client.api_url(), "backend worker ready");

            let mut catalog_requested = false;
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchCatalog => {
                        if catalog_requested {
                            tracing::warn!("catalog fetch already issued for this session");
                            continue;
                        }
                        catalog_requested = true;

                        let event = if load_catalog(&client, &store).await {
                            UiEvent::CatalogReady
                        } else {
                            UiEvent::CatalogUnavailable
                        };
                        let _ = ui_tx.try_send(event);
                    }
                    BackendCommand::FetchThumbnails { requests } => {
                        for ThumbnailRequest { product_id, url } in requests {
                            let client = client.clone();
                            let ui_tx = ui_tx.clone();
                            tokio::spawn(async move {
                                let event = fetch_thumbnail(&client, product_id, &url).await;
                                let _ = ui_tx.try_send(event);
                            });
                        }
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

async fn fetch_thumbnail(client: &CatalogClient, product_id: ProductId, url: &str) -> UiEvent {
    let bytes = match client.fetch_thumbnail(url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return UiEvent::ThumbnailFailed {
                product_id,
                reason: err.to_string(),
            }
        }
    };

    decode_off_runtime(product_id, bytes).await
}

/// Image decoding and resizing are CPU bound and run on the blocking pool.
async fn decode_off_runtime(product_id: ProductId, bytes: Vec<u8>) -> UiEvent {
    match tokio::task::spawn_blocking(move || decode_thumbnail(&bytes)).await {
        Ok(Ok(image)) => UiEvent::ThumbnailLoaded { product_id, image },
        Ok(Err(reason)) => UiEvent::ThumbnailFailed { product_id, reason },
        Err(err) => UiEvent::ThumbnailFailed {
            product_id,
            reason: format!("thumbnail decode task failed: {err}"),
        },
    }
}
