//! Error types for feature extraction.

use imgfeat_table::TableError;
use thiserror::Error;

/// Why a single image produced no feature vector.
///
/// These never abort a batch; the batch driver records them and moves on.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a valid image of the detected format.
    #[error("Image decode error: {0}")]
    Decode(String),

    /// The file is not in a format the decoder understands.
    #[error("Unsupported image format: {0}")]
    Unsupported(String),

    /// The image decoded to zero pixels.
    #[error("Image has zero pixels")]
    EmptyImage,

    /// The image is one pixel wide, so there are no horizontal neighbour pairs.
    #[error("Image is {width}x{height}; texture features need at least two columns")]
    NoPixelPairs { width: u32, height: u32 },

    /// Pixel data could not be converted to the working color spaces.
    #[error("Color conversion error: {0}")]
    ColorConversion(String),
}

impl FeatureError {
    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureError::Io(_) => "io",
            FeatureError::Decode(_) => "decode",
            FeatureError::Unsupported(_) => "unsupported",
            FeatureError::EmptyImage => "empty_image",
            FeatureError::NoPixelPairs { .. } => "no_pixel_pairs",
            FeatureError::ColorConversion(_) => "color_conversion",
        }
    }
}

/// Errors that stop a whole extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input directory could not be listed.
    #[error("Cannot list input directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The output sink failed.
    #[error("Output error: {0}")]
    Sink(#[from] TableError),
}
