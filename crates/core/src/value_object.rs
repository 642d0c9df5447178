//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are never mutated in place; a changed
/// value is a new value. `Price` and `InventoryEntry` are value objects, while
/// `Product` is an entity (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
