//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value. Immutability is what makes them safe to share across
/// threads without synchronization.
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced
/// - **Eq + Hash**: equality and hashing are structural and must agree
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```
/// use offerdesk_core::{Money, ValueObject};
/// use rust_decimal::Decimal;
///
/// fn assert_value_object<T: ValueObject>() {}
/// assert_value_object::<Money>();
///
/// let m1 = Money::new("USD", Decimal::new(10000, 2));
/// let m2 = Money::new("USD", Decimal::new(10000, 2));
/// assert_eq!(m1, m2); // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
