//! Backend-to-UI events.

use shared::domain::ProductId;

use crate::ui::thumbnails::ThumbnailImage;

#[derive(Debug)]
pub enum UiEvent {
    /// The shared catalog store has been populated.
    CatalogReady,
    /// The catalog fetch failed; the page stays empty.
    CatalogUnavailable,
    ThumbnailLoaded {
        product_id: ProductId,
        image: ThumbnailImage,
    },
    ThumbnailFailed {
        product_id: ProductId,
        reason: String,
    },
}
