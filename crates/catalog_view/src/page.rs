//! The catalog page: owns the filter and overlay state, routes UI events to
//! them, and renders the whole page as a [`PageView`].

use std::{collections::HashSet, sync::Arc};

use client_core::CatalogStore;
use serde::Serialize;
use shared::domain::{Product, ProductId};
use tracing::debug;

use crate::{
    categories::{derive_categories, CategoryOption},
    filter::{apply_filter, CategoryFilter, ALL_CATEGORIES, ALL_CATEGORIES_LABEL},
    grid::{render_grid, CardView},
    overlay::{DismissTrigger, Overlay, OverlayView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    FilterChanged(String),
    CardActivated(ProductId),
    DismissClicked,
    OverlayClicked { inside_content: bool },
    KeyPressed(Key),
}

/// Event kinds the page listens for while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    FilterChange,
    CardActivate,
    DismissControl,
    OverlayClick,
    KeyDown,
}

const PAGE_HANDLERS: [Handler; 5] = [
    Handler::FilterChange,
    Handler::CardActivate,
    Handler::DismissControl,
    Handler::OverlayClick,
    Handler::KeyDown,
];

impl UiAction {
    pub fn handler(&self) -> Handler {
        match self {
            Self::FilterChanged(_) => Handler::FilterChange,
            Self::CardActivated(_) => Handler::CardActivate,
            Self::DismissClicked => Handler::DismissControl,
            Self::OverlayClicked { .. } => Handler::OverlayClick,
            Self::KeyPressed(_) => Handler::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// No handler registered for the event.
    Ignored,
    Unchanged,
    Changed,
}

impl EventOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorView {
    pub options: Vec<CategoryOption>,
    pub selected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub selector: SelectorView,
    pub cards: Vec<CardView>,
    pub overlay: Option<OverlayView>,
    pub background_scroll_locked: bool,
}

/// Renders the page from its three inputs. The selector stays empty until
/// the catalog has been populated.
pub fn render_page(
    products: &[Product],
    populated: bool,
    filter: &CategoryFilter,
    overlay: &Overlay,
) -> PageView {
    let options = if populated {
        std::iter::once(CategoryOption {
            value: ALL_CATEGORIES.to_string(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        })
        .chain(derive_categories(products))
        .collect()
    } else {
        Vec::new()
    };

    PageView {
        selector: SelectorView {
            options,
            selected: filter.value().to_string(),
        },
        cards: render_grid(apply_filter(products, filter)),
        overlay: overlay.view(),
        background_scroll_locked: overlay.locks_background_scroll(),
    }
}

pub struct CatalogPage {
    store: Arc<CatalogStore>,
    filter: CategoryFilter,
    overlay: Overlay,
    handlers: HashSet<Handler>,
}

impl CatalogPage {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            filter: CategoryFilter::All,
            overlay: Overlay::Closed,
            handlers: HashSet::new(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_mounted(&self) -> bool {
        !self.handlers.is_empty()
    }

    pub fn handles(&self, handler: Handler) -> bool {
        self.handlers.contains(&handler)
    }

    /// Registers the page's event handlers. Mounting twice is harmless.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        self.handlers.extend(PAGE_HANDLERS);
        debug!("catalog page mounted");
    }

    /// Drops every handler and closes the overlay so background scrolling is
    /// restored.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.handlers.clear();
        self.overlay = Overlay::Closed;
        debug!("catalog page unmounted");
    }

    pub fn handle(&mut self, action: UiAction) -> EventOutcome {
        if !self.handles(action.handler()) {
            return EventOutcome::Ignored;
        }

        let changed = match action {
            UiAction::FilterChanged(value) => self.select_filter(&value),
            UiAction::CardActivated(product_id) => self.select_product(product_id),
            UiAction::DismissClicked => self.overlay.dismiss(DismissTrigger::Control),
            UiAction::OverlayClicked { inside_content } => {
                !inside_content && self.overlay.dismiss(DismissTrigger::Backdrop)
            }
            UiAction::KeyPressed(Key::Escape) => self.overlay.dismiss(DismissTrigger::CancelKey),
            UiAction::KeyPressed(Key::Other) => false,
        };
        EventOutcome::from_changed(changed)
    }

    fn select_filter(&mut self, value: &str) -> bool {
        let filter = CategoryFilter::from_value(value);
        if filter == self.filter {
            return false;
        }
        debug!(filter = filter.value(), "category filter changed");
        self.filter = filter;
        true
    }

    // Only cards currently rendered can be activated.
    fn select_product(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self
            .store
            .get(product_id)
            .filter(|product| self.filter.matches(product))
        else {
            debug!(product_id = product_id.0, "ignoring activation of unknown card");
            return false;
        };

        if self.overlay.selected() == Some(product) {
            return false;
        }
        self.overlay.open(product.clone());
        true
    }

    pub fn render(&self) -> PageView {
        render_page(
            self.store.all(),
            self.store.is_populated(),
            &self.filter,
            &self.overlay,
        )
    }
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
