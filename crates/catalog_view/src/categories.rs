use std::collections::HashSet;

use serde::Serialize;
use shared::domain::Product;

/// One entry of the category selector: the raw label is the filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            value: raw.to_string(),
            label: humanize_label(raw),
        }
    }
}

/// `"home-decoration"` becomes `"Home Decoration"`.
pub fn humanize_label(raw: &str) -> String {
    raw.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Distinct categories in first-seen order.
pub fn derive_categories(products: &[Product]) -> Vec<CategoryOption> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|product| seen.insert(product.category.as_str()))
        .map(|product| CategoryOption::from_raw(&product.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use shared::domain::ProductId;

    use super::*;

    fn product(id: usize, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: format!("p{id}"),
            thumbnail: String::new(),
            price: 1.0,
            description: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn humanizes_hyphenated_labels() {
        assert_eq!(humanize_label("home-decoration"), "Home Decoration");
        assert_eq!(humanize_label("mens-shirts"), "Mens Shirts");
        assert_eq!(humanize_label("beauty"), "Beauty");
        assert_eq!(humanize_label("x"), "X");
    }

    #[test]
    fn humanize_keeps_empty_tokens() {
        assert_eq!(humanize_label(""), "");
        assert_eq!(humanize_label("a--b"), "A  B");
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let products = vec![
            product(0, "groceries"),
            product(1, "beauty"),
            product(2, "groceries"),
            product(3, "home-decoration"),
            product(4, "beauty"),
        ];

        let values: Vec<_> = derive_categories(&products)
            .into_iter()
            .map(|option| (option.value, option.label))
            .collect();
        assert_eq!(
            values,
            vec![
                ("groceries".to_string(), "Groceries".to_string()),
                ("beauty".to_string(), "Beauty".to_string()),
                ("home-decoration".to_string(), "Home Decoration".to_string()),
            ]
        );
    }

    #[test]
    fn no_products_no_categories() {
        assert!(derive_categories(&[]).is_empty());
    }
}
