//! Products domain module: point-in-time product snapshots.
//!
//! Offers and orders price against a [`ProductSnapshot`] rather than the live
//! catalog entry, so later catalog changes don't alter existing offers.

pub mod snapshot;

pub use snapshot::{ProductId, ProductSnapshot, ProductType};
