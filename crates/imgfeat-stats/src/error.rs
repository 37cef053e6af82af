//! Error types for the statistics stages.

use imgfeat_table::TableError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Variance threshold outside `(0, 1]`.
    #[error("Variance threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Need at least {required} rows, got {actual}")]
    NotEnoughSamples { required: usize, actual: usize },

    #[error("Table has no feature columns")]
    NoFeatures,

    /// A table with a different column count than the one fitted.
    #[error("Expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// PCA cannot decompose a covariance matrix built from NaN or infinite cells.
    #[error("Row '{id}', column '{column}' is not finite")]
    NonFinite { id: String, column: String },

    #[error(transparent)]
    Table(#[from] TableError),
}
