//! UI layer for the desktop catalog viewer: app shell and thumbnail handling.

pub mod app;
pub mod thumbnails;

pub use app::CatalogApp;
