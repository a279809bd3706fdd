//! Money: a currency-tagged decimal amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An amount of money in a given currency.
///
/// The currency is an ISO 4217 code (e.g. `"USD"`) and is stored verbatim.
/// The amount is an arbitrary-precision decimal; no rounding is applied.
///
/// Equality is exact: `100.0` and `100.00` are different amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    currency: String,
    value: Decimal,
}

impl ValueObject for Money {}

impl Money {
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Same amount written at the same scale, regardless of currency.
    pub fn has_same_value(&self, other: &Money) -> bool {
        self.value == other.value && self.value.scale() == other.value.scale()
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_currency(other) && self.has_same_value(other)
    }
}

impl Eq for Money {}

impl core::hash::Hash for Money {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.value.hash(state);
        self.value.scale().hash(state);
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
