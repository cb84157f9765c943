//! Backend commands queued from UI to backend worker.

use shared::domain::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Issued once at startup.
    FetchCatalog,
    FetchThumbnails { requests: Vec<ThumbnailRequest> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailRequest {
    pub product_id: ProductId,
    pub url: String,
}
