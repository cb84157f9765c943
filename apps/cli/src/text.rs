//! Plain-text rendering of a [`PageView`].

use std::fmt::Write as _;

use catalog_view::{OverlayView, PageView};

pub fn render_text(view: &PageView) -> String {
    let mut out = String::new();

    let options: Vec<String> = view
        .selector
        .options
        .iter()
        .map(|option| {
            if option.value == view.selector.selected {
                format!("[{}]", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "Categories: {}", options.join(" | "));

    if view.cards.is_empty() {
        let _ = writeln!(out, "No products.");
    }
    for (index, card) in view.cards.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<40} {:>12}  {}",
            index + 1,
            card.title,
            card.price_label,
            card.category_label.to_uppercase()
        );
    }

    if let Some(overlay) = &view.overlay {
        render_overlay(&mut out, overlay);
    }
    out
}

fn render_overlay(out: &mut String, overlay: &OverlayView) {
    let _ = writeln!(out);
    let _ = writeln!(out, "== {} ==", overlay.title);
    let _ = writeln!(out, "Price: {}", overlay.price_label);
    let _ = writeln!(out, "Image: {}", overlay.image_url);
    let _ = writeln!(out, "{}", overlay.description);
}
