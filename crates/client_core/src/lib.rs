use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{products_from_records, Product},
    error::ApiError,
    protocol::ProductListResponse,
};
use tracing::{debug, error, info, warn};

pub mod config;
pub mod error;
pub mod store;

pub use config::{load_settings, ClientSettings};
pub use error::{FetchError, SettingsError, StoreError};
pub use store::CatalogStore;

/// Where the catalog comes from. The HTTP client is the only production
/// implementation; tests substitute canned sources.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    api_url: String,
}

impl CatalogClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch_catalog(&self) -> Result<ProductListResponse, FetchError> {
        let body = self.get_bytes(&self.api_url).await?;
        let catalog: ProductListResponse =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: self.api_url.clone(),
                source,
            })?;

        debug!(
            products = catalog.products.len(),
            total = ?catalog.total,
            skip = ?catalog.skip,
            limit = ?catalog.limit,
            "catalog response decoded"
        );
        Ok(catalog)
    }

    /// Raw bytes of a product image.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.get_bytes(url).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                api_error: ApiError::from_body(&body),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let catalog = self.fetch_catalog().await?;
        Ok(products_from_records(catalog.products))
    }
}

/// Fetches the catalog once and populates `store`.
///
/// Failures are logged and swallowed: the store stays empty and `false` is
/// returned. Nothing is retried.
pub async fn load_catalog<S>(source: &S, store: &CatalogStore) -> bool
where
    S: ProductSource + ?Sized,
{
    if store.is_populated() {
        warn!("catalog already loaded for this session; skipping fetch");
        return false;
    }

    let products = match source.fetch_products().await {
        Ok(products) => products,
        Err(err) => {
            error!("error fetching products: {err}");
            return false;
        }
    };

    let count = products.len();
    match store.set_all(products) {
        Ok(()) => {
            info!(count, "catalog loaded");
            true
        }
        Err(err) => {
            warn!("discarding fetched catalog: {err}");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
