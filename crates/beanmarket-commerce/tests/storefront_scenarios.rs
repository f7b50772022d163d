//! End-to-end storefront scenarios over the sample catalog.

use beanmarket_commerce::prelude::*;

fn open() -> Storefront {
    Storefront::open(SessionContext::buyer(), sample_catalog()).expect("sample catalog is valid")
}

fn names<'a>(results: &QueryResults<'a>) -> Vec<&'a str> {
    results.items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn browse_everything_in_catalog_order() {
    let store = open();
    let results = store.browse(&CatalogQuery::new());

    assert_eq!(results.len(), 6);
    assert_eq!(names(&results)[0], "Ethiopian Yirgacheffe");
    assert_eq!(names(&results)[5], "Costa Rica Tarrazú");
    assert_eq!(results.summary_line(), "Showing 6 of 6 coffees");
}

#[test]
fn search_by_flavor_fragment() {
    let store = open();
    let results = store.browse(&CatalogQuery::new().with_text("choc"));
    assert_eq!(names(&results), vec!["Colombian Supremo", "Brazilian Santos"]);
}

#[test]
fn add_twice_then_zero_empties_cart() {
    let mut store = open();
    let a = ItemId::new("1");

    store.add_to_cart(&a).unwrap();
    store.add_to_cart(&a).unwrap();
    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(store.cart().item_count(), 2);

    let event = store.set_quantity(&a, 0);
    assert!(matches!(event, Some(CartEvent::Removed { .. })));
    assert!(store.cart().is_empty());
    assert_eq!(store.cart().item_count(), 0);
}

#[test]
fn total_uses_each_line_price() {
    let mut store = open();
    store.add_to_cart(&ItemId::new("1")).unwrap();
    store.add_to_cart(&ItemId::new("2")).unwrap();
    store.add_to_cart(&ItemId::new("2")).unwrap();

    let summary = store.cart_summary();
    assert_eq!(summary.total, Money::usd(6999));
    assert_eq!(summary.total.display(), "$69.99");
    assert_eq!(summary.item_count, 3);
    assert_ne!(summary.item_count as usize, summary.lines.len());
}

#[test]
fn in_stock_under_25() {
    let store = open();
    let query = CatalogQuery::new()
        .with_stock(StockFilter::InStockOnly)
        .with_price("under-25".parse().unwrap());
    let results = store.browse(&query);

    assert_eq!(
        names(&results),
        vec!["Ethiopian Yirgacheffe", "Colombian Supremo", "Brazilian Santos"]
    );
    for item in &results.items {
        assert!(item.in_stock);
        assert!(item.unit_price.amount_cents < 2500);
    }
}

#[test]
fn cart_survives_catalog_changes() {
    let session = SessionContext::buyer();
    let mut items = sample_catalog();
    let mut cart = Cart::new(&session);

    cart.add_item(&items[0]);
    items[0].unit_price = Money::usd(3999);
    let repriced = CatalogStore::new(&session, items).unwrap();
    cart.add_item(repriced.get(&ItemId::new("1")).unwrap());

    assert_eq!(cart.lines()[0].unit_price, Money::usd(2499));
    assert_eq!(cart.total_price(), Money::usd(4998));
}

#[test]
fn notifications_follow_the_storefront_flow() {
    let mut store = open();
    let kenya = ItemId::new("5");

    store.add_to_cart(&kenya).unwrap();
    store.increment(&kenya);
    store.remove_from_cart(&kenya);
    store.remove_from_cart(&kenya);
    store.clear_cart();

    let toasts: Vec<String> = store
        .drain_events()
        .iter()
        .filter_map(CartEvent::notification)
        .collect();
    assert_eq!(
        toasts,
        vec![
            "Added Kenya AA to cart!".to_string(),
            "Item removed from cart".to_string(),
            "Cart cleared".to_string(),
        ]
    );
}

#[test]
fn suggestions_come_from_first_seen_flavors() {
    let store = open();
    let suggestions = store.catalog().flavor_suggestions(3);
    assert_eq!(suggestions, vec!["Floral", "Citrus", "Berry"]);
}
