//! Ordinal categories for signed rating changes

use serde::{Deserialize, Serialize};

/// Changes of at least this magnitude count as strong
pub const STRONG_DELTA: f64 = 2.0;

/// Direction and size of a rating change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeltaCategory {
    StrongDown,
    WeakDown,
    WeakUp,
    StrongUp,
}

/// Classify a rating change. Boundaries close toward the more positive
/// category, so exactly `0.0` is `WeakUp` and exactly `2.0` is `StrongUp`.
pub fn classify(delta: f64) -> DeltaCategory {
    if delta >= STRONG_DELTA {
        DeltaCategory::StrongUp
    } else if delta >= 0.0 {
        DeltaCategory::WeakUp
    } else if delta > -STRONG_DELTA {
        DeltaCategory::WeakDown
    } else {
        // Also catches NaN
        DeltaCategory::StrongDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(2.0), DeltaCategory::StrongUp);
        assert_eq!(classify(1.999), DeltaCategory::WeakUp);
        assert_eq!(classify(0.0), DeltaCategory::WeakUp);
        assert_eq!(classify(-0.0), DeltaCategory::WeakUp);
        assert_eq!(classify(-0.001), DeltaCategory::WeakDown);
        assert_eq!(classify(-1.999), DeltaCategory::WeakDown);
        assert_eq!(classify(-2.0), DeltaCategory::StrongDown);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(250.0), DeltaCategory::StrongUp);
        assert_eq!(classify(f64::INFINITY), DeltaCategory::StrongUp);
        assert_eq!(classify(-250.0), DeltaCategory::StrongDown);
        assert_eq!(classify(f64::NEG_INFINITY), DeltaCategory::StrongDown);
    }

    #[test]
    fn test_categories_are_ordered() {
        assert!(DeltaCategory::StrongUp > DeltaCategory::WeakUp);
        assert!(DeltaCategory::WeakUp > DeltaCategory::WeakDown);
        assert!(DeltaCategory::WeakDown > DeltaCategory::StrongDown);
    }
}
