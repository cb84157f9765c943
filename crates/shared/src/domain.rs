use serde::{Deserialize, Serialize};

use crate::protocol::ProductRecord;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub usize);
    };
}

// Position of the product in the catalog response.
id_newtype!(ProductId);

/// One catalog item as held by the catalog store for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

impl Product {
    pub fn from_record(id: ProductId, record: ProductRecord) -> Self {
        Self {
            id,
            title: record.title,
            thumbnail: record.thumbnail,
            price: record.price,
            description: record.description,
            category: record.category,
        }
    }
}

/// Assigns ids from source order.
pub fn products_from_records(records: Vec<ProductRecord>) -> Vec<Product> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Product::from_record(ProductId(index), record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_source_order() {
        let records = vec![
            ProductRecord {
                title: "A".to_string(),
                ..ProductRecord::default()
            },
            ProductRecord {
                title: "B".to_string(),
                ..ProductRecord::default()
            },
        ];

        let products = products_from_records(records);
        assert_eq!(products[0].id, ProductId(0));
        assert_eq!(products[0].title, "A");
        assert_eq!(products[1].id, ProductId(1));
        assert_eq!(products[1].title, "B");
    }
}
