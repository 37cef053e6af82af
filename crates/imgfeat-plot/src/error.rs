//! Error types for the plotter.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    /// Canvas size or resolution out of range.
    #[error("Invalid chart dimensions: {0}")]
    InvalidDimensions(String),
}
