//! Presentation logic for the catalog viewer.
//!
//! Everything here is a pure function of the catalog store, the selected
//! category filter and the detail overlay. Front ends draw the resulting
//! [`PageView`] and feed user input back through [`CatalogPage::handle`].

pub mod categories;
pub mod filter;
pub mod grid;
pub mod overlay;
pub mod page;
pub mod price;

pub use categories::{derive_categories, humanize_label, CategoryOption};
pub use filter::{apply_filter, CategoryFilter, ALL_CATEGORIES};
pub use grid::{render_grid, CardView};
pub use overlay::{DismissTrigger, Overlay, OverlayView};
pub use page::{
    render_page, CatalogPage, EventOutcome, Handler, Key, PageView, SelectorView, UiAction,
};
pub use price::format_price;
