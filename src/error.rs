//! Error types for the rating engine
//!
//! All failures are caller-input errors detected before any arithmetic runs.
//! Functions return the anyhow-based [`Result`] alias; the typed
//! [`RatingError`] can be recovered with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Input and configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid rating deviation: {deviation} (must be finite and positive)")]
    InvalidDeviation { deviation: f64 },

    #[error("Invalid outcome: {outcome} (must be within 0.0..=1.0)")]
    InvalidOutcome { outcome: f64 },

    #[error("Invalid rating value: {value} (must be finite)")]
    InvalidRatingValue { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
