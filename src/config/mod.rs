//! Configuration management for glicko-calc
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, DisplaySettings, ServiceSettings};
pub use rating::RatingConfig;
