use shared::domain::Product;

/// Selector value that shows the whole catalog.
pub const ALL_CATEGORIES: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// The selector value this filter corresponds to.
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }
}

/// Products visible under `filter`, in catalog order.
pub fn apply_filter<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .collect()
}
