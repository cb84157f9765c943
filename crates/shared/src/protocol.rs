use serde::{Deserialize, Serialize};

/// A product as it appears in the catalog API body.
///
/// Missing fields decode to blank values instead of failing the whole body;
/// fields the viewer has no use for (`id`, `rating`, `images`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}
