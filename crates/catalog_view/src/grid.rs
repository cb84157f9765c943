use serde::Serialize;
use shared::domain::{Product, ProductId};

use crate::price::format_price;

/// Declarative description of one product card. Activating it selects
/// `product_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub product_id: ProductId,
    pub thumbnail_url: String,
    pub alt_text: String,
    pub title: String,
    pub price_label: String,
    pub category_label: String,
}

impl CardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            thumbnail_url: product.thumbnail.clone(),
            alt_text: product.title.clone(),
            title: product.title.clone(),
            price_label: format_price(product.price),
            category_label: product.category.clone(),
        }
    }
}

/// One card per product, in the given order. The result replaces whatever
/// grid was shown before.
pub fn render_grid<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<CardView> {
    products.into_iter().map(CardView::from_product).collect()
}
