//! Glicko rating engine
//!
//! Stateless numeric core: primitives in [`glicko`], single-game updates in
//! [`updater`], pre-game probabilities in [`predictor`] and change
//! categories in [`classifier`]. [`calculator`] binds them to a
//! [`RatingConfig`](crate::config::RatingConfig).

pub mod calculator;
pub mod classifier;
pub mod glicko;
pub mod predictor;
pub mod updater;

// Re-export commonly used types
pub use calculator::{GlickoCalculator, MatchupReport, MatchupSide};
pub use classifier::{classify, DeltaCategory};
pub use glicko::{impact_factor, pairwise_expectation, variance, Q};
pub use predictor::{perceptual_probability, predict};
pub use updater::{
    decay_deviation, rating_change, update, update_with_min_deviation, MIN_DEVIATION,
};
