//! Single-game rating updates
//!
//! One observation at a time: applying [`update`] twice with the same inputs
//! is not the same as a combined update over two games, and the opponent's
//! update must be computed from the same pre-game snapshot rather than from
//! the result of this one.

use crate::error::RatingError;
use crate::rating::glicko::{impact_factor, pairwise_expectation, variance, Q};
use crate::types::{Outcome, RatingPoint, RatingUpdateResult};
use tracing::debug;

/// Residual uncertainty kept after any update
pub const MIN_DEVIATION: f64 = 25.0;

/// Update `own` after a game against `other`, keeping at least
/// [`MIN_DEVIATION`] of uncertainty.
pub fn update(own: &RatingPoint, other: &RatingPoint, outcome: Outcome) -> RatingUpdateResult {
    update_with_min_deviation(own, other, outcome, MIN_DEVIATION)
}

/// Update `own` after a game against `other` with an explicit deviation floor
pub fn update_with_min_deviation(
    own: &RatingPoint,
    other: &RatingPoint,
    outcome: Outcome,
    min_deviation: f64,
) -> RatingUpdateResult {
    let e = pairwise_expectation(own, other);
    let d2 = variance(own, other);
    let weight = 1.0 / (1.0 / (own.deviation() * own.deviation()) + 1.0 / d2);

    let new_value =
        own.value() + Q * weight * impact_factor(other.deviation()) * (outcome.value() - e);
    let new_deviation = weight.sqrt().max(min_deviation);

    debug!(
        own = %own,
        other = %other,
        outcome = outcome.value(),
        expectation = e,
        new_value,
        new_deviation,
        "Computed rating update"
    );

    RatingUpdateResult {
        new_value,
        new_deviation,
    }
}

/// Signed rating change `own` would see from this outcome
pub fn rating_change(own: &RatingPoint, other: &RatingPoint, outcome: Outcome) -> f64 {
    update(own, other, outcome).delta_from(own)
}

/// Grow the deviation of an inactive competitor.
///
/// Each rating period adds `c` in quadrature, capped at `max_deviation`:
/// `min(sqrt(deviation² + periods·c²), max_deviation)`. Zero periods leave
/// the point unchanged.
pub fn decay_deviation(
    point: &RatingPoint,
    rating_periods: u32,
    c: f64,
    max_deviation: f64,
) -> crate::error::Result<RatingPoint> {
    if !(max_deviation.is_finite() && max_deviation > 0.0) {
        return Err(RatingError::InvalidDeviation {
            deviation: max_deviation,
        }
        .into());
    }
    if !(c.is_finite() && c >= 0.0) {
        return Err(RatingError::ConfigurationError {
            message: format!("Decay constant must be finite and non-negative, got {}", c),
        }
        .into());
    }
    if rating_periods == 0 {
        return Ok(*point);
    }

    let grown = point.deviation().powi(2) + f64::from(rating_periods) * c * c;
    RatingPoint::new(point.value(), grown.sqrt().min(max_deviation))
}
