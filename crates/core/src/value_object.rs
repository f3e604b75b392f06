//! Value object trait: equality by value, not identity.
//!
//! Attribute schemas, product-level pricing and resolved price sets are value
//! objects: two of them holding the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
