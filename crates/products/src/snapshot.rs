use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offerdesk_core::{AggregateId, Money, ValueObject};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category, as it was when the snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

/// Immutable copy of a product's sale-relevant attributes.
///
/// Snapshots are typically shared (`Arc<ProductSnapshot>`) by every offer item
/// that prices the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductSnapshot {
    id: ProductId,
    name: String,
    price: Money,
    product_type: ProductType,
    snapshot_at: DateTime<Utc>,
}

impl ValueObject for ProductSnapshot {}

impl ProductSnapshot {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        product_type: ProductType,
        snapshot_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            product_type,
            snapshot_at,
        }
    }

    /// Snapshot taken at the current wall-clock time.
    pub fn capture(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        product_type: ProductType,
    ) -> Self {
        Self::new(id, name, price, product_type, Utc::now())
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_at(&self) -> DateTime<Utc> {
        self.snapshot_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_product_id() -> ProductId {
        ProductId::new(AggregateId::new())
    }

    #[test]
    fn exposes_captured_attributes() {
        let id = test_product_id();
        let at = Utc::now();
        let snapshot = ProductSnapshot::new(
            id,
            "Espresso beans",
            Money::new("EUR", dec!(14.90)),
            ProductType::Food,
            at,
        );

        assert_eq!(snapshot.id(), id);
        assert_eq!(snapshot.name(), "Espresso beans");
        assert_eq!(snapshot.price(), &Money::new("EUR", dec!(14.90)));
        assert_eq!(snapshot.product_type(), ProductType::Food);
        assert_eq!(snapshot.snapshot_at(), at);
    }

    #[test]
    fn product_id_displays_wrapped_id() {
        let aggregate_id = AggregateId::new();
        let id = ProductId::new(aggregate_id);
        assert_eq!(id.to_string(), aggregate_id.to_string());
        assert_eq!(id, ProductId::new(aggregate_id));
    }

    #[test]
    fn product_type_serializes_lowercase() {
        let json = serde_json::to_string(&ProductType::Drug).unwrap();
        assert_eq!(json, "\"drug\"");
    }
}
