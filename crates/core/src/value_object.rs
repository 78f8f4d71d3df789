//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are the same value. `Money` is the
/// canonical example here: `$10.00` equals `$10.00` no matter where either
/// came from, while a `Product` with the same name is still a different
/// product if its `ProductId` differs.
///
/// To "modify" a value object, create a new one with the new values. This
/// keeps them safe to share and predictable to compare.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
