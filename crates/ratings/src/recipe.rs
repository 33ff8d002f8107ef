use serde::{Deserialize, Serialize};

use tastebook_core::{identity_eq, ValueEq, ValueObject};

use crate::rating::Rating;

/// A named recipe bundled with its rating.
///
/// `==` compares by value: equal name and value-equal rating (the rating's
/// reviewer does not participate). Identity comparison stays available as
/// [`Recipe::identity_eq`]. No ordering is defined on recipes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    rating: Rating,
}

impl Recipe {
    /// Create a recipe. Both fields are required and immutable afterwards.
    pub fn new(name: impl Into<String>, rating: Rating) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> &Rating {
        &self.rating
    }

    /// Identity tier: is `other` the exact same instance?
    pub fn identity_eq(&self, other: &Recipe) -> bool {
        identity_eq(self, other)
    }
}

impl ValueEq for Recipe {
    fn value_eq(&self, other: &Self) -> bool {
        self.name == other.name && self.rating.value_eq(&other.rating)
    }
}

/// `==` aliases the value tier: name plus value-equal rating.
impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Eq for Recipe {}

impl ValueObject for Recipe {}
