//! Configured rating calculator and matchup reports
//!
//! [`GlickoCalculator`] binds the free functions of the engine to a validated
//! [`RatingConfig`], and builds a [`MatchupReport`] describing everything a
//! front end shows for a hypothetical game between two competitors.

use crate::config::rating::RatingConfig;
use crate::error::RatingError;
use crate::rating::classifier::{classify, DeltaCategory};
use crate::rating::glicko::pairwise_expectation;
use crate::rating::predictor::{perceptual_probability, predict};
use crate::rating::updater::{decay_deviation, update_with_min_deviation};
use crate::types::{Outcome, RatingPoint, RatingUpdateResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Possible results of a matchup for one of the two competitors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSide {
    pub rating: RatingPoint,
    /// Expectation term used by the update, weighted by the opponent's deviation
    pub expectation: f64,
    pub win_delta: f64,
    pub win_category: DeltaCategory,
    pub loss_delta: f64,
    pub loss_category: DeltaCategory,
    /// Deviation after the game; the same for either result
    pub new_deviation: f64,
}

/// Pre-game view of a matchup between `own` and `opponent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    /// Probability that `own` wins
    pub win_probability: f64,
    pub perceptual_win_probability: f64,
    pub own: MatchupSide,
    pub opponent: MatchupSide,
}

/// Glicko calculator bound to a rating configuration
#[derive(Debug, Clone, Default)]
pub struct GlickoCalculator {
    config: RatingConfig,
}

impl GlickoCalculator {
    /// Create a new calculator, rejecting invalid configuration
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rating for a competitor with no history
    pub fn default_rating(&self) -> crate::error::Result<RatingPoint> {
        RatingPoint::new(self.config.default_rating, self.config.initial_deviation)
    }

    /// Update `own` after a game against `other`, applying the configured floor
    pub fn update(
        &self,
        own: &RatingPoint,
        other: &RatingPoint,
        outcome: Outcome,
    ) -> RatingUpdateResult {
        update_with_min_deviation(own, other, outcome, self.config.min_deviation)
    }

    /// Update both competitors from the same pre-game snapshots.
    ///
    /// `outcome` is from `first`'s perspective.
    pub fn update_pair(
        &self,
        first: &RatingPoint,
        second: &RatingPoint,
        outcome: Outcome,
    ) -> (RatingUpdateResult, RatingUpdateResult) {
        (
            self.update(first, second, outcome),
            self.update(second, first, outcome.opposite()),
        )
    }

    /// Signed rating change of `own` for this outcome
    pub fn rating_change(&self, own: &RatingPoint, other: &RatingPoint, outcome: Outcome) -> f64 {
        self.update(own, other, outcome).delta_from(own)
    }

    /// Probability that `own` beats `other`
    pub fn predict(&self, own: &RatingPoint, other: &RatingPoint) -> f64 {
        predict(own, other)
    }

    /// Grow the deviation of a competitor idle for `rating_periods`
    pub fn decay(
        &self,
        point: &RatingPoint,
        rating_periods: u32,
    ) -> crate::error::Result<RatingPoint> {
        decay_deviation(
            point,
            rating_periods,
            self.config.decay_constant,
            self.config.initial_deviation,
        )
    }

    fn side(&self, own: &RatingPoint, other: &RatingPoint) -> MatchupSide {
        let win = self.update(own, other, Outcome::WIN);
        let loss = self.update(own, other, Outcome::LOSS);
        let win_delta = win.delta_from(own);
        let loss_delta = loss.delta_from(own);

        MatchupSide {
            rating: *own,
            expectation: pairwise_expectation(own, other),
            win_delta,
            win_category: classify(win_delta),
            loss_delta,
            loss_category: classify(loss_delta),
            new_deviation: win.new_deviation,
        }
    }

    /// Everything shown for a hypothetical game between `own` and `opponent`
    pub fn matchup(&self, own: &RatingPoint, opponent: &RatingPoint) -> MatchupReport {
        let win_probability = self.predict(own, opponent);
        let report = MatchupReport {
            win_probability,
            perceptual_win_probability: perceptual_probability(win_probability),
            own: self.side(own, opponent),
            opponent: self.side(opponent, own),
        };

        debug!(
            win_probability,
            own_win_delta = report.own.win_delta,
            own_loss_delta = report.own.loss_delta,
            "Computed matchup"
        );

        report
    }

    /// Get current configuration as JSON
    pub fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    /// Replace the configuration from JSON
    pub fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: RatingConfig =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid rating configuration: {}", e),
            })?;

        if let Err(e) = new_config.validate() {
            warn!("Rejected rating configuration: {}", e);
            return Err(e);
        }

        self.config = new_config;
        Ok(())
    }
}
