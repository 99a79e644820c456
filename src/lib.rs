//! glicko-calc - Glicko rating update engine
//!
//! This crate computes pairwise win probabilities and single-game rating
//! updates for competitors described by a rating value and a deviation, and
//! provides the presentation helpers used by the `glicko-calc` front end.

pub mod config;
pub mod error;
pub mod presentation;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{classify, predict, update, DeltaCategory, GlickoCalculator, MatchupReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
