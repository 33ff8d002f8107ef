//! Three-tier equality contract: value, strict, identity.
//!
//! Domain types in this workspace expose up to three *independently callable*
//! notions of "equal", from weakest to strongest:
//!
//! - **Value equality** ([`ValueEq`]): equal on the designated value field,
//!   ignoring everything else. Two ratings with the same score but different
//!   reviewers are value-equal.
//! - **Strict equality** ([`StrictEq`]): equal on *all* designated fields,
//!   with representation-sensitive comparison where the field is numeric.
//!   An integer score of `5` is NOT strictly equal to a floating-point `5.0`.
//! - **Identity equality** ([`identity_eq`]): the two operands are the same
//!   underlying instance, not merely equal in attributes. Two separately
//!   constructed values are never identity-equal, however equal their fields.
//!
//! Each tier is a distinctly named method so none of them collides with the
//! others or with `==`. Where a type *does* implement `PartialEq`, the
//! operator aliases exactly one tier — value equality — and says so in its
//! docs.

/// Value equality: the weakest tier.
///
/// Implementations compare only the designated value field and must be
/// symmetric. `strict_eq` refines this contract, so `StrictEq` requires it
/// as a supertrait.
pub trait ValueEq {
    fn value_eq(&self, other: &Self) -> bool;
}

/// Strict equality: all designated fields, representation-sensitive.
///
/// Law: `a.strict_eq(b)` implies `a.value_eq(b)`. The reverse does not hold;
/// strict equality additionally distinguishes numeric representations and
/// compares secondary fields that value equality ignores.
pub trait StrictEq: ValueEq {
    fn strict_eq(&self, other: &Self) -> bool;
}

/// Identity equality: do `a` and `b` refer to the same instance?
///
/// This is pointer identity over the borrowed places, the strongest tier.
/// It is reflexive (`identity_eq(x, x)` is true for any `x`) and never true
/// for two separately constructed values, even field-for-field equal ones.
pub fn identity_eq<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}
