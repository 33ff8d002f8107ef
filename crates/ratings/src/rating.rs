use serde::{Deserialize, Serialize};

use tastebook_core::{identity_eq, Score, StrictEq, ValueEq, ValueObject};

/// A single rating: a numeric score and the reviewer who gave it.
///
/// `Rating` carries the full three-tier comparison contract:
///
/// - `==` / [`ValueEq::value_eq`] compare the score only (numerically);
///   two ratings with the same score from different reviewers are equal.
/// - [`StrictEq::strict_eq`] additionally requires the same reviewer and the
///   same numeric representation of the score.
/// - [`Rating::identity_eq`] is true only for the same instance.
///
/// Ordering (`<`, `<=`, `>`, `>=`) is by score alone, consistent with `==`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    score: Score,
    reviewer: String,
}

impl Rating {
    /// Create a rating. Both fields are required and immutable afterwards.
    pub fn new(score: impl Into<Score>, reviewer: impl Into<String>) -> Self {
        Self {
            score: score.into(),
            reviewer: reviewer.into(),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn reviewer(&self) -> &str {
        &self.reviewer
    }

    /// Identity tier: is `other` the exact same instance?
    ///
    /// Never true for two separately constructed ratings, even when their
    /// fields are equal.
    pub fn identity_eq(&self, other: &Rating) -> bool {
        identity_eq(self, other)
    }
}

impl ValueEq for Rating {
    fn value_eq(&self, other: &Self) -> bool {
        self.score.value_eq(&other.score)
    }
}

impl StrictEq for Rating {
    fn strict_eq(&self, other: &Self) -> bool {
        self.score.strict_eq(&other.score) && self.reviewer == other.reviewer
    }
}

/// `==` aliases the value tier: score only, reviewer ignored.
impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Eq for Rating {}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ValueObject for Rating {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use tastebook_core::DomainResult;

    fn rating(score: i32, reviewer: &str) -> Rating {
        Rating::new(score, reviewer)
    }

    fn float_rating(score: f64, reviewer: &str) -> DomainResult<Rating> {
        Ok(Rating::new(Score::try_from(score)?, reviewer))
    }

    #[test]
    fn value_equality_ignores_the_reviewer() {
        let a = rating(5, "Alice");
        let b = rating(5, "Bob");

        assert!(a.value_eq(&b));
        assert_eq!(a, b);
        assert!(!a.strict_eq(&b));
    }

    #[test]
    fn value_equality_requires_equal_scores() {
        assert_ne!(rating(5, "Alice"), rating(4, "Alice"));
    }

    #[test]
    fn strict_equality_holds_for_separately_built_twins() {
        let a = rating(5, "Alice");
        let b = rating(5, "Alice");

        assert!(a.strict_eq(&b));
        assert!(!a.identity_eq(&b));
    }

    #[test]
    fn strict_equality_distinguishes_score_representations() {
        let int = rating(5, "Alice");
        let float = float_rating(5.0, "Alice").unwrap();

        assert!(int.value_eq(&float));
        assert!(!int.strict_eq(&float));
    }

    #[test]
    fn identity_is_reflexive_and_not_shared_by_clones() {
        let a = rating(5, "Alice");
        let copy = a.clone();

        assert!(a.identity_eq(&a));
        assert!(!a.identity_eq(&copy));
        assert!(a.strict_eq(&copy));
    }

    #[test]
    fn ordering_is_by_score_and_antisymmetric() {
        let higher = rating(5, "Alice");
        let lower = rating(4, "Alice");

        assert_eq!(higher.cmp(&lower), Ordering::Greater);
        assert_eq!(lower.cmp(&higher), Ordering::Less);
        assert!(higher > lower);
        assert!(lower < higher);
    }

    #[test]
    fn ratings_with_equal_scores_compare_equal_across_reviewers() {
        let a = rating(5, "Alice");
        let b = rating(5, "Bob");

        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(a <= b);
        assert!(a >= b);
    }

    #[test]
    fn serializes_with_a_bare_numeric_score() {
        let json = serde_json::to_string(&rating(5, "Alice")).unwrap();
        assert_eq!(json, r#"{"score":5,"reviewer":"Alice"}"#);

        let back: Rating = serde_json::from_str(&json).unwrap();
        assert!(back.strict_eq(&rating(5, "Alice")));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_rating() -> impl Strategy<Value = Rating> {
            (-1000..1000i32, "[A-Za-z][A-Za-z0-9 ]{0,12}")
                .prop_map(|(score, reviewer)| Rating::new(score, reviewer))
        }

        proptest! {
            /// Property: ordering ignores the reviewer entirely.
            #[test]
            fn ordering_ignores_the_reviewer(
                score in -1000..1000i32,
                reviewer_a in "[A-Za-z]{1,12}",
                reviewer_b in "[A-Za-z]{1,12}",
            ) {
                let a = Rating::new(score, reviewer_a);
                let b = Rating::new(score, reviewer_b);
                prop_assert_eq!(a.cmp(&b), Ordering::Equal);
            }

            /// Property: ordering of ratings agrees with ordering of scores.
            #[test]
            fn ordering_agrees_with_score_ordering(a in any_rating(), b in any_rating()) {
                prop_assert_eq!(a.cmp(&b), a.score().cmp(&b.score()));
                prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            }

            /// Property: `==` holds exactly when `cmp` yields Equal.
            #[test]
            fn equality_is_consistent_with_ordering(a in any_rating(), b in any_rating()) {
                prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
            }

            /// Property: strict equality refines value equality.
            #[test]
            fn strict_equality_implies_value_equality(a in any_rating(), b in any_rating()) {
                if a.strict_eq(&b) {
                    prop_assert!(a.value_eq(&b));
                }
            }
        }
    }
}
