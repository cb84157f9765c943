//! Detail overlay: closed, or open on exactly one product.

use serde::Serialize;
use shared::domain::{Product, ProductId};
use tracing::debug;

use crate::price::format_price;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Control,
    Backdrop,
    CancelKey,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Product),
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&Product> {
        match self {
            Self::Open(product) => Some(product),
            Self::Closed => None,
        }
    }

    /// Shows `product`, replacing any current selection.
    pub fn open(&mut self, product: Product) {
        debug!(product_id = product.id.0, "opening product overlay");
        *self = Self::Open(product);
    }

    /// Returns whether anything changed; dismissing a closed overlay is a no-op.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        if !self.is_open() {
            return false;
        }
        debug!(?trigger, "closing product overlay");
        *self = Self::Closed;
        true
    }

    /// Background scrolling is suppressed while the overlay is open.
    pub fn locks_background_scroll(&self) -> bool {
        self.is_open()
    }

    pub fn view(&self) -> Option<OverlayView> {
        self.selected().map(OverlayView::from_product)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub product_id: ProductId,
    pub image_url: String,
    pub title: String,
    pub price_label: String,
    pub description: String,
}

impl OverlayView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            image_url: product.thumbnail.clone(),
            title: product.title.clone(),
            price_label: format_price(product.price),
            description: product.description.clone(),
        }
    }
}
