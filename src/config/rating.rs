//! Rating system configuration

use crate::error::RatingError;
use crate::types::{DEFAULT_RATING, INITIAL_DEVIATION};
use serde::{Deserialize, Serialize};

/// Parameters of the Glicko engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating for competitors with no history
    pub default_rating: f64,
    /// Deviation for competitors with no history, also the decay ceiling
    pub initial_deviation: f64,
    /// Floor applied to every updated deviation
    pub min_deviation: f64,
    /// Deviation added in quadrature per inactive rating period
    pub decay_constant: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_RATING,
            initial_deviation: INITIAL_DEVIATION,
            min_deviation: crate::rating::updater::MIN_DEVIATION,
            decay_constant: 0.4,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        let fail = |message: &str| -> crate::error::Result<()> {
            Err(RatingError::ConfigurationError {
                message: message.to_string(),
            }
            .into())
        };

        if !self.default_rating.is_finite() {
            return fail("Default rating must be finite");
        }
        if !(self.initial_deviation.is_finite() && self.initial_deviation > 0.0) {
            return fail("Initial deviation must be positive");
        }
        if !(self.min_deviation.is_finite() && self.min_deviation > 0.0) {
            return fail("Minimum deviation must be positive");
        }
        if self.min_deviation > self.initial_deviation {
            return fail("Minimum deviation cannot exceed initial deviation");
        }
        if !(self.decay_constant.is_finite() && self.decay_constant >= 0.0) {
            return fail("Decay constant must be non-negative");
        }

        Ok(())
    }
}
