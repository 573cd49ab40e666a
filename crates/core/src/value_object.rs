//! Value object marker: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// Two value objects with the same attribute values are the same value;
/// there is no identity to preserve across state changes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
