//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: two shares over the same amount and percentage are the same share,
/// regardless of where they were computed. Entities (participants, expenses)
/// carry an identity instead; see [`crate::Entity`].
///
/// To "modify" a value object, build a new one. The trait only requires what
/// value semantics need: `Clone`, `PartialEq` and `Debug`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
