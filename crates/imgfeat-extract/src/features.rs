//! The 14-value feature vector of one image.

use std::path::Path;

use image::RgbImage;
use imgfeat_table::FeatureVector;

use crate::circular::hue_statistics;
use crate::color::{to_gray, to_hsv, to_luminance};
use crate::error::FeatureError;
use crate::glcm::Glcm;
use crate::histogram::shannon_entropy;
use crate::loader::load_rgb;
use crate::moments::moments;

/// Load an image file and compute its features.
pub fn extract_features(path: &Path) -> Result<FeatureVector, FeatureError> {
    let img = load_rgb(path)?;
    features_from_rgb(&img)
}

/// Compute the features of a decoded RGB image.
///
/// Values are stored in [`imgfeat_table::FeatureColumn`] order.
pub fn features_from_rgb(img: &RgbImage) -> Result<FeatureVector, FeatureError> {
    features_from_pixels(img.as_raw(), img.width(), img.height())
}

/// Compute the features of row-major 8-bit RGB pixels.
///
/// Fails with [`FeatureError::ColorConversion`] when `raw` does not hold
/// exactly `width * height` pixels.
pub fn features_from_pixels(
    raw: &[u8],
    width: u32,
    height: u32,
) -> Result<FeatureVector, FeatureError> {
    if width == 0 || height == 0 {
        return Err(FeatureError::EmptyImage);
    }
    if width < 2 {
        return Err(FeatureError::NoPixelPairs { width, height });
    }

    let hsv = to_hsv(raw, width, height)?;
    let hue = hue_statistics(&hsv.hue).ok_or(FeatureError::EmptyImage)?;
    let saturation = moments(&hsv.saturation).ok_or(FeatureError::EmptyImage)?;
    let value = moments(&hsv.value).ok_or(FeatureError::EmptyImage)?;

    let gray = to_gray(raw, width, height)?;
    let texture = Glcm::from_gray(&gray, width, height)?.properties();
    let entropy = shannon_entropy(&gray);

    let intensity = moments(&to_luminance(raw, width, height)?).ok_or(FeatureError::EmptyImage)?;

    Ok(FeatureVector::from([
        hue.mean,
        saturation.mean,
        value.mean,
        hue.std,
        saturation.std,
        value.std,
        texture.contrast,
        texture.dissimilarity,
        texture.homogeneity,
        texture.asm,
        texture.correlation,
        entropy,
        intensity.mean,
        intensity.std,
    ]))
}
