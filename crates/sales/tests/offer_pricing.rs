//! Offer pricing through the public API of the products and sales crates.

use std::sync::Arc;

use offerdesk_core::{AggregateId, DomainError, Money};
use offerdesk_products::{ProductId, ProductSnapshot, ProductType};
use offerdesk_sales::{Discount, OfferItem, SameAsTolerance};
use rust_decimal_macros::dec;

fn setup() {
    offerdesk_observability::init();
}

fn snapshot(price: Money) -> Arc<ProductSnapshot> {
    Arc::new(ProductSnapshot::capture(
        ProductId::new(AggregateId::new()),
        "Standing desk",
        price,
        ProductType::Standard,
    ))
}

#[test]
fn two_units_without_discount() {
    setup();
    let item = OfferItem::without_discount(snapshot(Money::new("USD", dec!(100.00))), 2).unwrap();

    assert_eq!(item.total_cost(), &Money::new("USD", dec!(200.00)));
}

#[test]
fn two_units_with_discount() {
    setup();
    let discount = Discount::new("spring sale", Money::new("USD", dec!(10.00)));
    let item = OfferItem::new(snapshot(Money::new("USD", dec!(100.00))), 2, Some(discount)).unwrap();

    assert_eq!(item.total_cost(), &Money::new("USD", dec!(190.00)));
    assert_eq!(item.discount().map(Discount::cause), Some("spring sale"));
}

#[test]
fn discount_in_euros_on_dollar_product_fails() {
    setup();
    let discount = Discount::new("spring sale", Money::new("EUR", dec!(5.00)));
    let err = OfferItem::new(snapshot(Money::new("USD", dec!(100.00))), 1, Some(discount))
        .unwrap_err();

    match err {
        DomainError::CurrencyMismatch { expected, actual } => {
            assert_eq!(expected, "USD");
            assert_eq!(actual, "EUR");
        }
        other => panic!("Expected CurrencyMismatch, got {other:?}"),
    }
}

#[test]
fn items_sharing_a_snapshot_compare_by_tolerance() {
    setup();
    let product = snapshot(Money::new("USD", dec!(52.00)));
    let quoted = OfferItem::new(
        Arc::clone(&product),
        2,
        Some(Discount::new("bundle", Money::new("USD", dec!(4.00)))),
    )
    .unwrap();
    let recalculated = OfferItem::without_discount(Arc::clone(&product), 2).unwrap();

    // 100 vs 104
    assert_eq!(quoted.total_cost().value(), dec!(100.00));
    assert_eq!(recalculated.total_cost().value(), dec!(104.00));
    assert!(quoted.same_as(&recalculated, 5.0));
    assert!(!quoted.same_as(&recalculated, 3.0));
    assert!(quoted.same_as_within(&recalculated, SameAsTolerance::default()));
    assert_ne!(quoted, recalculated);
    assert_eq!(Arc::strong_count(&product), 3);
}

#[test]
fn items_for_different_product_types_are_not_the_same() {
    setup();
    let id = ProductId::new(AggregateId::new());
    let at = chrono::Utc::now();
    let price = Money::new("USD", dec!(12.00));
    let food = Arc::new(ProductSnapshot::new(id, "Vitamin C", price.clone(), ProductType::Food, at));
    let drug = Arc::new(ProductSnapshot::new(id, "Vitamin C", price, ProductType::Drug, at));

    let a = OfferItem::without_discount(food, 1).unwrap();
    let b = OfferItem::without_discount(drug, 1).unwrap();

    assert!(!a.same_as(&b, 50.0));
}
