//! Error types for table handling.

use thiserror::Error;

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building, reading or writing dataset tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header does not have the expected shape.
    #[error("Invalid table schema: {0}")]
    Schema(String),

    /// A row does not have one value per feature column.
    #[error("Row '{id}' has {actual} values, expected {expected}")]
    RowLength {
        id: String,
        expected: usize,
        actual: usize,
    },

    /// A cell could not be parsed as a number.
    #[error("Row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
