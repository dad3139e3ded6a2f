//! Cart store behaviour

use makercart::prelude::*;
use rust_decimal::{Decimal, dec};
use testresult::TestResult;

fn item(
    service_id: &str,
    maker_id: &str,
    price: Decimal,
    quantity: u32,
) -> Result<CartLineItem, LineItemError> {
    CartLineItem::new(service_id, maker_id, "Service", "Maker", price, quantity)
}

fn ready_store() -> CartStore<MemoryStorage> {
    CartStore::open(MemoryStorage::new())
}

fn assert_total_matches_items(cart: &Cart) {
    let expected = cart
        .iter()
        .map(|i| i.price() * Decimal::from(i.quantity().get()))
        .sum::<Decimal>();

    assert_eq!(cart.total(), expected, "total out of step with items");
}

#[test]
fn add_update_remove_scenario() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(CartLineItem::new("s1", "m1", "Print", "Lab", dec!(10.0), 1)?);

    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().total(), dec!(10.0));

    store.add_to_cart(CartLineItem::new("s1", "m1", "Print", "Lab", dec!(999), 2)?);

    let line = store.cart().get("s1", "m1").ok_or("line item missing")?;

    assert_eq!(store.cart().len(), 1);
    assert_eq!(line.quantity().get(), 3);
    assert_eq!(line.price(), dec!(10.0));
    assert_eq!(store.cart().total(), dec!(30.0));

    store.update_quantity("s1", "m1", 0);

    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total(), dec!(0.0));

    Ok(())
}

#[test]
fn two_distinct_items_total() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(item("a", "m1", dec!(5.0), 2)?);
    store.add_to_cart(item("b", "m1", dec!(7.5), 1)?);

    assert_eq!(store.cart().total(), dec!(17.5));

    Ok(())
}

#[test]
fn clear_cart_always_empties() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(item("a", "m1", dec!(5.0), 2)?);
    store.add_to_cart(item("b", "m2", dec!(7.5), 1)?);

    store.clear_cart();

    assert!(store.cart().items().is_empty());
    assert_eq!(store.cart().total(), Decimal::ZERO);

    store.clear_cart();

    assert_eq!(store.cart(), &Cart::new());

    Ok(())
}

#[test]
fn repeated_adds_never_duplicate_keys() -> TestResult {
    let mut store = ready_store();
    let keys = [("a", "m1"), ("b", "m1"), ("a", "m2"), ("a", "m1"), ("b", "m1")];

    for (n, (service_id, maker_id)) in (1_u32..).zip(keys.iter().cycle().take(25)) {
        store.add_to_cart(item(service_id, maker_id, Decimal::from(n), n)?);

        let mut seen: Vec<&LineItemKey> = store.cart().iter().map(CartLineItem::key).collect();
        let before = seen.len();
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), before, "duplicate key after add #{n}");
        assert_total_matches_items(store.cart());
    }

    assert_eq!(store.cart().len(), 3);

    Ok(())
}

#[test]
fn total_tracks_every_operation() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(item("a", "m1", dec!(0.10), 3)?);
    assert_total_matches_items(store.cart());

    store.add_to_cart(item("b", "m1", dec!(19.99), 1)?);
    assert_total_matches_items(store.cart());

    store.update_quantity("b", "m1", 7);
    assert_total_matches_items(store.cart());

    store.remove_from_cart("a", "m1");
    assert_total_matches_items(store.cart());

    assert_eq!(store.cart().total(), dec!(139.93));

    Ok(())
}

#[test]
fn nonpositive_quantity_matches_remove() -> TestResult {
    for quantity in [0, -5] {
        let mut updated = ready_store();
        let mut removed = ready_store();

        for store in [&mut updated, &mut removed] {
            store.add_to_cart(item("a", "m1", dec!(5.0), 2)?);
            store.add_to_cart(item("b", "m1", dec!(1.0), 1)?);
        }

        updated.update_quantity("a", "m1", quantity);
        removed.remove_from_cart("a", "m1");

        assert_eq!(updated.cart(), removed.cart(), "quantity {quantity}");
        assert!(updated.cart().get("a", "m1").is_none(), "quantity {quantity}");
    }

    Ok(())
}

#[test]
fn missing_key_operations_are_noops() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(item("a", "m1", dec!(5.0), 2)?);

    let before = store.cart().clone();

    store.remove_from_cart("x", "m1");
    store.update_quantity("x", "m1", 3);
    store.update_quantity("a", "m9", 3);

    assert_eq!(store.cart(), &before);

    Ok(())
}

#[test]
fn repeated_updates_and_removes_are_idempotent() -> TestResult {
    let mut store = ready_store();

    store.add_to_cart(item("a", "m1", dec!(5.0), 2)?);
    store.add_to_cart(item("b", "m1", dec!(1.0), 1)?);

    store.update_quantity("a", "m1", 4);
    let once = store.cart().clone();
    store.update_quantity("a", "m1", 4);

    assert_eq!(store.cart(), &once);

    store.remove_from_cart("b", "m1");
    let once = store.cart().clone();
    store.remove_from_cart("b", "m1");

    assert_eq!(store.cart(), &once);

    Ok(())
}

#[test]
fn catalog_listing_snapshot_survives_catalog_changes() -> TestResult {
    let mut listing = ServiceListing {
        service_id: "s1".to_string(),
        service_name: "Resin print".to_string(),
        price: dec!(12.00),
        maker: MakerProfile {
            maker_id: "m1".to_string(),
            maker_name: "Print Lab".to_string(),
        },
    };

    let mut store = ready_store();

    store.add_to_cart(listing.line_item(1)?);

    listing.price = dec!(15.00);
    listing.service_name = "Resin print (large)".to_string();

    store.add_to_cart(listing.line_item(1)?);

    let line = store.cart().get("s1", "m1").ok_or("line item missing")?;

    assert_eq!(line.service_name(), "Resin print");
    assert_eq!(store.cart().total(), dec!(24.00));

    Ok(())
}
