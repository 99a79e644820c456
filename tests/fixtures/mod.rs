//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use glicko_calc::config::RatingConfig;
use glicko_calc::rating::GlickoCalculator;
use glicko_calc::RatingPoint;

/// Build a rating point that is known to be valid
pub fn rating(value: f64, deviation: f64) -> RatingPoint {
    RatingPoint::new(value, deviation).expect("fixture rating must be valid")
}

/// Calculator with the default configuration
pub fn default_calculator() -> GlickoCalculator {
    GlickoCalculator::new(RatingConfig::default()).expect("default config must be valid")
}

/// A spread of realistic competitors, from newcomers to established players
pub fn sample_ratings() -> Vec<RatingPoint> {
    vec![
        rating(1500.0, 350.0),
        rating(1500.0, 200.0),
        rating(1720.0, 60.0),
        rating(1380.0, 240.0),
        rating(2100.0, 45.0),
        rating(950.0, 120.0),
        rating(1500.0, 25.0),
    ]
}

/// Approximate float comparison
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
