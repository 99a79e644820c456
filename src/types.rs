//! Common types used throughout the rating engine

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Rating value assigned to a competitor with no history
pub const DEFAULT_RATING: f64 = 1500.0;

/// Deviation assigned to a competitor with no history
pub const INITIAL_DEVIATION: f64 = 350.0;

/// One competitor's current belief state: a rating value and its uncertainty.
///
/// Construction validates both numbers, so every `RatingPoint` in circulation
/// has a finite value and a finite, strictly positive deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRatingPoint")]
pub struct RatingPoint {
    value: f64,
    deviation: f64,
}

#[derive(Deserialize)]
struct RawRatingPoint {
    value: f64,
    deviation: f64,
}

impl TryFrom<RawRatingPoint> for RatingPoint {
    type Error = RatingError;

    fn try_from(raw: RawRatingPoint) -> Result<Self, Self::Error> {
        Self::validated(raw.value, raw.deviation)
    }
}

impl RatingPoint {
    /// Create a rating point, rejecting non-finite values and
    /// non-positive deviations
    pub fn new(value: f64, deviation: f64) -> crate::error::Result<Self> {
        Ok(Self::validated(value, deviation)?)
    }

    fn validated(value: f64, deviation: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::InvalidRatingValue { value });
        }
        if !deviation.is_finite() || deviation <= 0.0 {
            return Err(RatingError::InvalidDeviation { deviation });
        }
        Ok(Self { value, deviation })
    }

    /// Rating estimate on the Elo-like scale
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Uncertainty of the estimate, always > 0
    pub fn deviation(&self) -> f64 {
        self.deviation
    }
}

impl Default for RatingPoint {
    fn default() -> Self {
        Self {
            value: DEFAULT_RATING,
            deviation: INITIAL_DEVIATION,
        }
    }
}

impl PartialOrd for RatingPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl std::fmt::Display for RatingPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ±{:.1}", self.value, self.deviation)
    }
}

/// Observed result of a single game from one side's perspective:
/// `0.0` is a loss, `0.5` a draw, `1.0` a win.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Outcome(f64);

impl Outcome {
    pub const LOSS: Outcome = Outcome(0.0);
    pub const DRAW: Outcome = Outcome(0.5);
    pub const WIN: Outcome = Outcome(1.0);

    /// Create an outcome, rejecting anything outside `0.0..=1.0`
    pub fn new(outcome: f64) -> crate::error::Result<Self> {
        Ok(Self::try_from(outcome)?)
    }

    /// The same game seen from the opponent's side
    pub fn opposite(self) -> Self {
        Outcome(1.0 - self.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Outcome {
    type Error = RatingError;

    fn try_from(outcome: f64) -> Result<Self, Self::Error> {
        if (0.0..=1.0).contains(&outcome) {
            Ok(Outcome(outcome))
        } else {
            Err(RatingError::InvalidOutcome { outcome })
        }
    }
}

impl From<Outcome> for f64 {
    fn from(Outcome(outcome): Outcome) -> f64 {
        outcome
    }
}

/// Rating and deviation after a single game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdateResult {
    pub new_value: f64,
    pub new_deviation: f64,
}

impl RatingUpdateResult {
    /// Signed change relative to the pre-game rating
    pub fn delta_from(&self, before: &RatingPoint) -> f64 {
        self.new_value - before.value()
    }

    /// The post-game state as a rating point for the next game
    pub fn into_rating_point(self) -> crate::error::Result<RatingPoint> {
        RatingPoint::new(self.new_value, self.new_deviation)
    }
}
