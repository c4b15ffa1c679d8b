//! Error types for lifeweb_core.
//!
//! Covers grid construction, seeding, stepping and debug output.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Height or width of zero at construction time
    #[error("Invalid grid dimensions: {height}x{width} (both must be positive)")]
    InvalidDimension { height: usize, width: usize },

    /// Seed percentage outside 0..=100
    #[error("Invalid fill percentage: {0} (expected 0..=100)")]
    InvalidPercentage(u8),

    /// Stepper called on grids of different shape
    #[error("Dimension mismatch: source is {source_dims:?}, target is {target_dims:?}")]
    DimensionMismatch {
        source_dims: (usize, usize),
        target_dims: (usize, usize),
    },

    /// Debug dump could not be written
    #[error("Write failure: {0}")]
    WriteFailure(#[from] std::io::Error),
}

/// Result type alias for lifeweb_core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a dimension mismatch error from two `(height, width)` pairs.
    #[must_use]
    pub fn mismatch(source_dims: (usize, usize), target_dims: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            source_dims,
            target_dims,
        }
    }
}
