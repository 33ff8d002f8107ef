//! Value object trait: immutable, compared by value.

/// Marker trait for value objects.
///
/// Value objects have **no identity of their own** - they are defined
/// entirely by their attribute values and are **immutable** once
/// constructed. To "modify" one, build a new one. This keeps them safe to
/// share across threads and predictable to compare.
///
/// In this workspace value objects additionally carry the three-tier
/// equality contract (see [`crate::equality`]): `PartialEq` on a value
/// object aliases the *value* tier, while strict and identity comparison
/// stay available under their own names.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
