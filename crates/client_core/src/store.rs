//! Write-once, read-many holder of the fetched catalog.

use std::sync::OnceLock;

use shared::domain::{Product, ProductId};

use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: OnceLock<Vec<Product>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the store. Only the first call per session succeeds.
    pub fn set_all(&self, products: Vec<Product>) -> Result<(), StoreError> {
        self.products
            .set(products)
            .map_err(|_| StoreError::AlreadyPopulated)
    }

    pub fn all(&self) -> &[Product] {
        self.products.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_populated(&self) -> bool {
        self.products.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.all().get(id.0).filter(|product| product.id == id)
    }
}
