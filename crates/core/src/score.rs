//! Numeric score domain.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::equality::{StrictEq, ValueEq};
use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Wire shape of a score: a bare number, integer or float.
///
/// Kept private so every float reaches [`Score`] through validation,
/// whichever serde format it arrives in.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Int(i32),
    Float(f64),
}

/// A rating score: an integer or a floating-point number.
///
/// The two representations compare as equal numerically (`5 == 5.0`) but are
/// distinguished by [`StrictEq::strict_eq`]. The integer representation is
/// `i32` so every integer score is exactly representable as `f64`, keeping
/// cross-representation comparison exact.
///
/// Invariant: a float score is always finite and never `-0.0`. Every
/// constructor and the `Deserialize` impl enforce this, which is what lets
/// `Score` carry `Eq` and a total `Ord`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "ScoreRepr", into = "ScoreRepr")]
pub struct Score(ScoreRepr);

impl Score {
    /// Numeric view of the score, shared by both representations.
    pub fn as_f64(&self) -> f64 {
        match self.0 {
            ScoreRepr::Int(v) => f64::from(v),
            ScoreRepr::Float(v) => v,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.0, ScoreRepr::Int(_))
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score(ScoreRepr::Int(value))
    }
}

impl TryFrom<f64> for Score {
    type Error = DomainError;

    /// Rejects non-finite values so the score ordering stays total.
    fn try_from(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            tracing::debug!(score = value, "rejected non-finite score");
            return Err(DomainError::validation(format!(
                "score must be finite, got {value}"
            )));
        }
        // -0.0 and 0.0 are one number; normalize so Ord and == agree on it.
        Ok(Score(ScoreRepr::Float(if value == 0.0 { 0.0 } else { value })))
    }
}

// Deserialization funnels floats through the same validation as
// `TryFrom<f64>`.
impl TryFrom<ScoreRepr> for Score {
    type Error = DomainError;

    fn try_from(repr: ScoreRepr) -> DomainResult<Self> {
        match repr {
            ScoreRepr::Int(v) => Ok(Score::from(v)),
            ScoreRepr::Float(v) => Score::try_from(v),
        }
    }
}

impl From<Score> for ScoreRepr {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Value (numeric) equality: an integer `5` equals a float `5.0`.
impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (ScoreRepr::Int(a), ScoreRepr::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

// Float scores are finite by invariant, so numeric equality is a proper
// equivalence relation.
impl Eq for Score {}

impl ValueEq for Score {
    fn value_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Representation-sensitive equality: mismatched representations compare as
/// false, never as an error.
impl StrictEq for Score {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (ScoreRepr::Int(a), ScoreRepr::Int(b)) => a == b,
            (ScoreRepr::Float(a), ScoreRepr::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (ScoreRepr::Int(a), ScoreRepr::Int(b)) => a.cmp(&b),
            // Float scores are finite and zero-normalized by invariant, so
            // the IEEE total order coincides with numeric order here.
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for Score {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            ScoreRepr::Int(v) => core::fmt::Display::fmt(&v, f),
            ScoreRepr::Float(v) => core::fmt::Display::fmt(&v, f),
        }
    }
}

impl ValueObject for Score {}
