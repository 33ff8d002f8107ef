//! `tastebook-core` — comparison-semantics foundation.
//!
//! This crate contains the **pure domain** primitives of the workspace: the
//! three-tier equality contract (value, strict, identity), the numeric score
//! domain, and the validation error model. No infrastructure concerns.

pub mod equality;
pub mod error;
pub mod score;
pub mod value_object;

pub use equality::{identity_eq, StrictEq, ValueEq};
pub use error::{DomainError, DomainResult};
pub use score::Score;
pub use value_object::ValueObject;
