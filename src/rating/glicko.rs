//! Numeric primitives of the Glicko system
//!
//! These functions are shared by the updater and the predictor. They take
//! validated [`RatingPoint`]s, so every deviation seen here is strictly
//! positive and every value finite.

use crate::types::RatingPoint;
use std::f64::consts::{LN_10, PI};

/// Logistic steepness of the rating scale, `ln(10) / 400`
pub const Q: f64 = LN_10 / 400.0;

/// Attenuation `g(RD)` of an opponent's influence given its deviation.
///
/// Lies in `(0, 1]`, equals 1 at zero deviation and shrinks as the
/// deviation grows.
pub fn impact_factor(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * Q * Q * deviation * deviation / (PI * PI)).sqrt()
}

/// Logistic win probability for a rating gap scaled by `g`
pub(crate) fn logistic(impact: f64, rating_gap: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(impact * rating_gap / -400.0))
}

/// Expected score `E` of `own` against `other`, weighted by the opponent's
/// deviation only.
///
/// Not symmetric under swap: `pairwise_expectation(a, b) +
/// pairwise_expectation(b, a)` is generally not 1.
pub fn pairwise_expectation(own: &RatingPoint, other: &RatingPoint) -> f64 {
    logistic(
        impact_factor(other.deviation()),
        own.value() - other.value(),
    )
}

/// Estimated variance `d²` of the performance difference.
///
/// Grows without bound as the expectation approaches 0 or 1.
pub fn variance(own: &RatingPoint, other: &RatingPoint) -> f64 {
    let g = impact_factor(other.deviation());
    let e = pairwise_expectation(own, other);
    1.0 / (Q * Q * g * g * e * (1.0 - e))
}
