//! Color-space conversions on 8-bit RGB images.
//!
//! Conversions work on row-major RGB byte buffers so callers holding pixels
//! from any source can use them; the buffer length is checked against the
//! stated dimensions.
//!
//! HSV follows the common 8-bit encoding: hue is halved into `[0, 180)` so it
//! fits a byte, saturation and value span `[0, 255]`. Grayscale uses the
//! 14-bit fixed-point BT.601 weights, rounding to nearest.

use crate::error::FeatureError;

/// Number of distinct 8-bit hue codes; hue wraps at this value.
pub const HUE_RANGE: f64 = 180.0;

const GRAY_SHIFT: u32 = 14;
const GRAY_R: u32 = 4899;
const GRAY_G: u32 = 9617;
const GRAY_B: u32 = 1868;

/// Planar 8-bit HSV.
#[derive(Debug, Clone)]
pub struct HsvPlanes {
    pub hue: Vec<u8>,
    pub saturation: Vec<u8>,
    pub value: Vec<u8>,
}

/// Convert one RGB pixel to 8-bit HSV.
pub fn rgb_to_hsv8(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (max - min) as f64;

    let s = if max == 0 {
        0
    } else {
        (255.0 * diff / max as f64).round() as u8
    };

    if diff == 0.0 {
        return (0, s, max);
    }

    let (r, g, b) = (r as f64, g as f64, b as f64);
    let mut h = if max as f64 == r {
        60.0 * (g - b) / diff
    } else if max as f64 == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    let mut h8 = (h / 2.0).round();
    if h8 >= HUE_RANGE {
        h8 -= HUE_RANGE;
    }
    (h8 as u8, s, max)
}

/// BT.601 luma rounded to 8 bits.
#[inline]
pub fn rgb_to_gray8(r: u8, g: u8, b: u8) -> u8 {
    let acc = r as u32 * GRAY_R + g as u32 * GRAY_G + b as u32 * GRAY_B;
    ((acc + (1 << (GRAY_SHIFT - 1))) >> GRAY_SHIFT) as u8
}

/// Unrounded BT.601 luminance.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

fn checked_pixels(raw: &[u8], width: u32, height: u32) -> Result<&[u8], FeatureError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| {
            FeatureError::ColorConversion(format!(
                "{}x{} RGB overflows the address space",
                width, height
            ))
        })?;
    if raw.len() != expected {
        return Err(FeatureError::ColorConversion(format!(
            "pixel buffer holds {} bytes, {}x{} RGB needs {}",
            raw.len(),
            width,
            height,
            expected
        )));
    }
    Ok(raw)
}

/// Split row-major RGB pixels into HSV planes.
pub fn to_hsv(raw: &[u8], width: u32, height: u32) -> Result<HsvPlanes, FeatureError> {
    let raw = checked_pixels(raw, width, height)?;
    let n = raw.len() / 3;
    let mut planes = HsvPlanes {
        hue: Vec::with_capacity(n),
        saturation: Vec::with_capacity(n),
        value: Vec::with_capacity(n),
    };
    for px in raw.chunks_exact(3) {
        let (h, s, v) = rgb_to_hsv8(px[0], px[1], px[2]);
        planes.hue.push(h);
        planes.saturation.push(s);
        planes.value.push(v);
    }
    Ok(planes)
}

/// Row-major 8-bit grayscale.
pub fn to_gray(raw: &[u8], width: u32, height: u32) -> Result<Vec<u8>, FeatureError> {
    let raw = checked_pixels(raw, width, height)?;
    Ok(raw
        .chunks_exact(3)
        .map(|px| rgb_to_gray8(px[0], px[1], px[2]))
        .collect())
}

/// Per-pixel unrounded luminance.
pub fn to_luminance(raw: &[u8], width: u32, height: u32) -> Result<Vec<f64>, FeatureError> {
    let raw = checked_pixels(raw, width, height)?;
    Ok(raw
        .chunks_exact(3)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect())
}
