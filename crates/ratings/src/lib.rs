//! Ratings domain module.
//!
//! This crate contains the two value objects of the workspace — a recipe and
//! its rating — implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The comparison semantics live on [`Rating`]; see
//! `tastebook-core` for the contract they implement.

pub mod rating;
pub mod recipe;

pub use rating::Rating;
pub use recipe::Recipe;
