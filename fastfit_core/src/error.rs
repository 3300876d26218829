//! Error types for the fastfit_core library.

use crate::types::{IntensityTier, WorkoutCategory};
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fastfit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Application configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A plan input failed validation; `field` names the offending input
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A category has nothing to prescribe at the tier it resolved to
    #[error("No {tier} exercises available for category {category}")]
    EmptyExercisePool {
        category: WorkoutCategory,
        tier: IntensityTier,
    },

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Scheduling invariant broken while building a plan
    #[error("Scheduling error: {0}")]
    Schedule(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
