//! Pre-game win probabilities

use crate::rating::glicko::{impact_factor, logistic};
use crate::types::RatingPoint;
use tracing::debug;

/// Probability that `own` beats `other`, with both deviations pooled.
///
/// Unlike [`pairwise_expectation`](crate::rating::glicko::pairwise_expectation)
/// this is symmetric: `predict(a, b) + predict(b, a) == 1` up to rounding.
pub fn predict(own: &RatingPoint, other: &RatingPoint) -> f64 {
    let combined = own.deviation().hypot(other.deviation());
    let p = logistic(impact_factor(combined), own.value() - other.value());
    debug!(own = %own, other = %other, probability = p, "Predicted outcome");
    p
}

/// Smoothstep `3p² - 2p³`, pushing a displayed probability away from 50%.
///
/// Monotonic on `[0, 1]` with fixed points 0, 0.5 and 1. Presentation only;
/// never fed back into an update.
pub fn perceptual_probability(p: f64) -> f64 {
    p * p * (3.0 - 2.0 * p)
}
