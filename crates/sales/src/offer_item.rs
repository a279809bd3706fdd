use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use offerdesk_core::{DomainError, DomainResult, Money};
use offerdesk_products::ProductSnapshot;

use crate::discount::Discount;
use crate::tolerance::SameAsTolerance;

/// Offer line: a product snapshot, a quantity and an optional discount,
/// priced once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OfferItem {
    product: Arc<ProductSnapshot>,
    quantity: u32,
    total_cost: Money,
    discount: Option<Discount>,
}

impl OfferItem {
    /// Price `quantity` units of `product`, minus `discount` if any.
    ///
    /// Fails with [`DomainError::CurrencyMismatch`] when the discount is in a
    /// different currency than the product price, and with
    /// [`DomainError::AmountOutOfRange`] when the total overflows.
    pub fn new(
        product: Arc<ProductSnapshot>,
        quantity: u32,
        discount: Option<Discount>,
    ) -> DomainResult<Self> {
        if let Some(discount) = &discount {
            let price = product.price();
            if !price.is_same_currency(discount.value()) {
                tracing::warn!(
                    product_id = %product.id(),
                    price_currency = price.currency(),
                    discount_currency = discount.value().currency(),
                    "rejected offer item discount"
                );
                return Err(DomainError::currency_mismatch(
                    price.currency(),
                    discount.value().currency(),
                ));
            }
        }

        Self::priced(product, quantity, discount)
    }

    /// Same as [`Self::new`] with no discount.
    pub fn without_discount(product: Arc<ProductSnapshot>, quantity: u32) -> DomainResult<Self> {
        Self::priced(product, quantity, None)
    }

    /// Caller has already checked the discount currency.
    fn priced(
        product: Arc<ProductSnapshot>,
        quantity: u32,
        discount: Option<Discount>,
    ) -> DomainResult<Self> {
        let price = product.price();
        let discount_amount = discount
            .as_ref()
            .map_or(Decimal::ZERO, |discount| discount.value().value());

        let value = price
            .value()
            .checked_mul(Decimal::from(quantity))
            .and_then(|gross| gross.checked_sub(discount_amount))
            .ok_or_else(|| {
                tracing::warn!(
                    product_id = %product.id(),
                    quantity,
                    %price,
                    "offer item total overflowed"
                );
                DomainError::out_of_range(format!("{price} x {quantity} - {discount_amount}"))
            })?;

        let total_cost = Money::new(price.currency(), value);

        tracing::debug!(
            product_id = %product.id(),
            quantity,
            %total_cost,
            "priced offer item"
        );

        Ok(Self {
            product,
            quantity,
            total_cost,
            discount,
        })
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> &Money {
        &self.total_cost
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// Approximate equality.
    ///
    /// Product price (value and scale), name, id, type and quantity must match
    /// exactly. Total costs may differ by strictly less than `delta` percent of
    /// the larger total. Currencies of the totals are not compared. Tolerances
    /// too large for decimal arithmetic never match.
    pub fn same_as(&self, other: &OfferItem, delta: f64) -> bool {
        if let Some(field) = self.first_differing_field(other) {
            tracing::trace!(field, "offer items differ");
            return false;
        }

        let Some(ratio) = Decimal::from_f64(delta / 100.0) else {
            tracing::trace!(delta, "tolerance not representable as a decimal");
            return false;
        };

        let ours = self.total_cost.value();
        let theirs = other.total_cost.value();

        let Some(difference) = ours.checked_sub(theirs).map(|d| d.abs()) else {
            tracing::trace!("total cost difference overflowed");
            return false;
        };
        let Some(acceptable_delta) = ours.max(theirs).checked_mul(ratio) else {
            tracing::trace!(delta, "acceptable delta overflowed");
            return false;
        };

        acceptable_delta > difference
    }

    /// [`Self::same_as`] with a configured tolerance.
    pub fn same_as_within(&self, other: &OfferItem, tolerance: SameAsTolerance) -> bool {
        self.same_as(other, tolerance.percent())
    }

    fn first_differing_field(&self, other: &OfferItem) -> Option<&'static str> {
        let (ours, theirs) = (self.product(), other.product());

        if !ours.price().has_same_value(theirs.price()) {
            Some("price")
        } else if ours.name() != theirs.name() {
            Some("name")
        } else if ours.id() != theirs.id() {
            Some("id")
        } else if ours.product_type() != theirs.product_type() {
            Some("type")
        } else if self.quantity != other.quantity {
            Some("quantity")
        } else {
            None
        }
    }
}
