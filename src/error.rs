//! Error types for life_in_parallel.

use thiserror::Error;

/// Errors surfaced by lattice construction, seeding and experiment setup.
///
/// Outcomes that are part of normal operation are not errors: an unavailable
/// center of mass is `None` and a run that never stabilizes is
/// [`EquilibriumRecord::NonStabilizing`](crate::analysis::equilibrium::EquilibriumRecord).
#[derive(Debug, Error)]
pub enum LifeError {
    /// Unsupported mode, lattice too small, or a non-positive size/budget.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed JSON experiment config.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}

impl LifeError {
    /// Shorthand for building an [`LifeError::InvalidConfig`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LifeError>;
