//! Sales offers domain module.
//!
//! Pricing of offer items against product snapshots, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod discount;
pub mod offer_item;
pub mod tolerance;

pub use discount::Discount;
pub use offer_item::OfferItem;
pub use tolerance::{SameAsTolerance, TOLERANCE_ENV_VAR};
