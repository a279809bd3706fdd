use serde::{Deserialize, Serialize};

use offerdesk_core::{Money, ValueObject};

/// Monetary reduction applied to a single offer item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Discount {
    cause: String,
    value: Money,
}

impl ValueObject for Discount {}

impl Discount {
    pub fn new(cause: impl Into<String>, value: Money) -> Self {
        Self {
            cause: cause.into(),
            value,
        }
    }

    /// Why the discount was granted (promotion code, loyalty tier, ...).
    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn value(&self) -> &Money {
        &self.value
    }
}
