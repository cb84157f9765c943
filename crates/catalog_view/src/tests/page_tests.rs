use super::*;
use shared::domain::products_from_records;
use shared::protocol::ProductRecord;

fn record(title: &str, price: f64, category: &str) -> ProductRecord {
    ProductRecord {
        title: title.to_string(),
        thumbnail: format!("https://cdn.example/{}.png", title.to_lowercase()),
        price,
        description: format!("{title} description"),
        category: category.to_string(),
    }
}

fn populated_store(records: Vec<ProductRecord>) -> Arc<CatalogStore> {
    let store = CatalogStore::new();
    store
        .set_all(products_from_records(records))
        .expect("populate store");
    Arc::new(store)
}

fn two_product_page() -> CatalogPage {
    let mut page = CatalogPage::new(populated_store(vec![
        record("A", 10.0, "x"),
        record("B", 20.0, "y"),
    ]));
    page.mount();
    page
}

fn card_titles(view: &PageView) -> Vec<&str> {
    view.cards.iter().map(|card| card.title.as_str()).collect()
}

fn option_labels(view: &PageView) -> Vec<&str> {
    view.selector
        .options
        .iter()
        .map(|option| option.label.as_str())
        .collect()
}

#[test]
fn two_products_render_in_order_with_selector_options() {
    let page = two_product_page();
    let view = page.render();

    assert_eq!(card_titles(&view), ["A", "B"]);
    assert_eq!(view.cards[0].price_label, "$10");
    assert_eq!(view.cards[1].price_label, "$20");
    assert_eq!(option_labels(&view), ["All", "X", "Y"]);
    assert_eq!(view.selector.options[0].value, "all");
    assert_eq!(view.selector.options[1].value, "x");
    assert_eq!(view.selector.selected, "all");
    assert!(view.overlay.is_none());
    assert!(!view.background_scroll_locked);
}

#[test]
fn selecting_a_category_renders_only_its_cards() {
    let mut page = two_product_page();

    assert_eq!(
        page.handle(UiAction::FilterChanged("x".to_string())),
        EventOutcome::Changed
    );
    let view = page.render();
    assert_eq!(card_titles(&view), ["A"]);
    assert_eq!(view.selector.selected, "x");

    // Same filter again: same visible set.
    assert_eq!(
        page.handle(UiAction::FilterChanged("x".to_string())),
        EventOutcome::Unchanged
    );
    assert_eq!(card_titles(&page.render()), ["A"]);

    page.handle(UiAction::FilterChanged("all".to_string()));
    assert_eq!(card_titles(&page.render()), ["A", "B"]);
}

#[test]
fn activating_a_card_opens_overlay_with_its_fields() {
    let mut page = two_product_page();
    let card = page.render().cards[1].clone();

    assert_eq!(
        page.handle(UiAction::CardActivated(card.product_id)),
        EventOutcome::Changed
    );
    let view = page.render();
    let overlay = view.overlay.expect("overlay open");
    assert_eq!(overlay.title, "B");
    assert_eq!(overlay.price_label, "$20");
    assert_eq!(overlay.description, "B description");
    assert_eq!(overlay.image_url, "https://cdn.example/b.png");
    assert!(view.background_scroll_locked);
}

#[test]
fn every_dismiss_path_closes_the_overlay() {
    let dismissals = [
        UiAction::DismissClicked,
        UiAction::OverlayClicked {
            inside_content: false,
        },
        UiAction::KeyPressed(Key::Escape),
    ];

    for dismissal in dismissals {
        let mut page = two_product_page();
        page.handle(UiAction::CardActivated(ProductId(0)));
        assert!(page.overlay().is_open());

        assert_eq!(page.handle(dismissal.clone()), EventOutcome::Changed);
        let view = page.render();
        assert!(view.overlay.is_none(), "{dismissal:?} left overlay open");
        assert!(!view.background_scroll_locked);
    }
}

#[test]
fn clicks_inside_content_and_other_keys_keep_overlay_open() {
    let mut page = two_product_page();
    page.handle(UiAction::CardActivated(ProductId(0)));

    assert_eq!(
        page.handle(UiAction::OverlayClicked {
            inside_content: true
        }),
        EventOutcome::Unchanged
    );
    assert_eq!(
        page.handle(UiAction::KeyPressed(Key::Other)),
        EventOutcome::Unchanged
    );
    assert!(page.overlay().is_open());
}

#[test]
fn dismissing_when_closed_changes_nothing() {
    let mut page = two_product_page();
    let before = page.render();

    for dismissal in [
        UiAction::DismissClicked,
        UiAction::OverlayClicked {
            inside_content: false,
        },
        UiAction::KeyPressed(Key::Escape),
    ] {
        assert_eq!(page.handle(dismissal), EventOutcome::Unchanged);
    }
    assert_eq!(page.render(), before);
}

#[test]
fn hidden_or_unknown_cards_cannot_be_activated() {
    let mut page = two_product_page();
    page.handle(UiAction::FilterChanged("x".to_string()));

    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(1))),
        EventOutcome::Unchanged
    );
    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(42))),
        EventOutcome::Unchanged
    );
    assert!(!page.overlay().is_open());
}

#[test]
fn failed_fetch_leaves_page_empty_and_overlay_unreachable() {
    let mut page = CatalogPage::new(Arc::new(CatalogStore::new()));
    page.mount();

    let view = page.render();
    assert!(view.cards.is_empty());
    assert!(view.selector.options.is_empty());

    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(0))),
        EventOutcome::Unchanged
    );
    assert!(page.render().overlay.is_none());
}

#[test]
fn empty_catalog_offers_only_the_all_option() {
    let page = CatalogPage::new(populated_store(Vec::new()));
    let view = page.render();
    assert_eq!(option_labels(&view), ["All"]);
    assert!(view.cards.is_empty());
}

#[test]
fn events_are_ignored_until_mounted_and_after_unmount() {
    let mut page = CatalogPage::new(populated_store(vec![record("A", 10.0, "x")]));
    assert!(!page.is_mounted());
    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(0))),
        EventOutcome::Ignored
    );

    page.mount();
    page.mount();
    assert!(page.handles(Handler::KeyDown));
    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(0))),
        EventOutcome::Changed
    );

    page.unmount();
    assert!(!page.is_mounted());
    assert!(!page.overlay().is_open());
    assert_eq!(
        page.handle(UiAction::KeyPressed(Key::Escape)),
        EventOutcome::Ignored
    );
    assert_eq!(
        page.handle(UiAction::FilterChanged("x".to_string())),
        EventOutcome::Ignored
    );
    assert_eq!(page.filter(), &CategoryFilter::All);
}

#[test]
fn reselecting_the_open_product_is_unchanged_and_another_replaces_it() {
    let mut page = two_product_page();
    page.handle(UiAction::CardActivated(ProductId(0)));

    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(0))),
        EventOutcome::Unchanged
    );
    assert_eq!(
        page.handle(UiAction::CardActivated(ProductId(1))),
        EventOutcome::Changed
    );
    assert_eq!(
        page.overlay().selected().map(|p| p.title.as_str()),
        Some("B")
    );
}

#[test]
fn page_view_serializes_for_text_front_ends() {
    let page = two_product_page();
    let json = serde_json::to_value(page.render()).expect("serialize");
    assert_eq!(json["cards"][0]["title"], "A");
    assert_eq!(json["selector"]["options"][2]["label"], "Y");
    assert_eq!(json["overlay"], serde_json::Value::Null);
}
