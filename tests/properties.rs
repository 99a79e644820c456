//! Property tests for the rating engine

mod fixtures;

use fixtures::rating;
use glicko_calc::rating::{
    classify, impact_factor, pairwise_expectation, perceptual_probability, predict, update,
    variance, DeltaCategory, MIN_DEVIATION,
};
use glicko_calc::{Outcome, RatingPoint};
use proptest::prelude::*;

fn rating_point() -> impl Strategy<Value = RatingPoint> {
    (0.0..3000.0f64, 1.0..500.0f64).prop_map(|(value, deviation)| rating(value, deviation))
}

proptest! {
    #[test]
    fn predict_is_symmetric(own in rating_point(), other in rating_point()) {
        let sum = predict(&own, &other) + predict(&other, &own);
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn predict_is_a_probability(own in rating_point(), other in rating_point()) {
        let p = predict(&own, &other);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn win_moves_rating_above_loss(own in rating_point(), other in rating_point()) {
        let win = update(&own, &other, Outcome::WIN);
        let loss = update(&own, &other, Outcome::LOSS);
        prop_assert!(win.new_value > loss.new_value);
        prop_assert!(win.new_value > own.value());
        prop_assert!(loss.new_value < own.value());
    }

    #[test]
    fn deviation_never_below_floor(
        own in rating_point(),
        other in rating_point(),
        outcome in 0.0..=1.0f64,
    ) {
        let outcome = Outcome::new(outcome).unwrap();
        let result = update(&own, &other, outcome);
        prop_assert!(result.new_deviation >= MIN_DEVIATION);
        prop_assert!(result.new_deviation <= own.deviation().max(MIN_DEVIATION));
        prop_assert!(result.new_value.is_finite());
    }

    #[test]
    fn variance_is_finite_and_positive(own in rating_point(), other in rating_point()) {
        let d2 = variance(&own, &other);
        prop_assert!(d2.is_finite());
        prop_assert!(d2 > 0.0);
        let e = pairwise_expectation(&own, &other);
        prop_assert!(e > 0.0 && e < 1.0);
    }

    #[test]
    fn impact_factor_decreases_with_deviation(a in 0.0..1000.0f64, b in 0.0..1000.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(impact_factor(low) >= impact_factor(high));
        prop_assert!(impact_factor(high) > 0.0 && impact_factor(low) <= 1.0);
    }

    #[test]
    fn perceptual_probability_is_monotonic(a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(perceptual_probability(low) <= perceptual_probability(high) + 1e-12);
        let adjusted = perceptual_probability(a);
        prop_assert!(adjusted >= 0.0 && adjusted <= 1.0 + 1e-12);
    }

    #[test]
    fn perceptual_probability_pushes_away_from_half(p in 0.0..=1.0f64) {
        let adjusted = perceptual_probability(p);
        prop_assert!((adjusted - 0.5).abs() >= (p - 0.5).abs() - 1e-12);
    }

    #[test]
    fn classify_respects_thresholds(delta in -50.0..50.0f64) {
        let expected = if delta >= 2.0 {
            DeltaCategory::StrongUp
        } else if delta >= 0.0 {
            DeltaCategory::WeakUp
        } else if delta > -2.0 {
            DeltaCategory::WeakDown
        } else {
            DeltaCategory::StrongDown
        };
        prop_assert_eq!(classify(delta), expected);
    }

    #[test]
    fn classify_is_monotonic(a in -50.0..50.0f64, b in -50.0..50.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(low) <= classify(high));
    }
}
