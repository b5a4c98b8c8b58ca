//! Entity and value-object marker traits.

/// Entity marker + minimal interface: identity + continuity across edits.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Marker trait for value objects: immutable, compared by value.
///
/// Two value objects with the same attribute values are the same value;
/// there is no identity to track. Line items and loose numbers are value
/// objects, items and transactions are entities.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
