//! Circular statistics for hue.
//!
//! Hue wraps around, so its average is taken as the direction of the mean
//! unit vector rather than the arithmetic mean of the codes. Spread is the
//! circular standard deviation `sqrt(-2 ln R)`, with `R` the length of the
//! mean resultant vector.

use std::f64::consts::{PI, TAU};

use crate::color::HUE_RANGE;

/// Added to `R` before taking the logarithm so `R == 0` stays finite.
const RESULTANT_EPSILON: f64 = 1e-8;

/// Circular mean and spread of a hue sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularStats {
    /// Mean direction, in hue codes `[0, 180)`.
    pub mean: f64,
    /// Circular standard deviation, reported as `radians * 180 / PI`.
    pub std: f64,
    /// Mean resultant length in `[0, 1]`.
    pub resultant_length: f64,
}

/// Compute circular statistics of 8-bit hue codes. Returns `None` when empty.
///
/// A constant sample has `R == 1`; the log argument then exceeds one by the
/// epsilon and the spread is clamped to zero instead of becoming NaN. A
/// sample spread evenly around the circle has `R ≈ 0` and a spread of about
/// 348, the largest value this formula produces.
pub fn hue_statistics(hues: &[u8]) -> Option<CircularStats> {
    if hues.is_empty() {
        return None;
    }

    let n = hues.len() as f64;
    let (sum_sin, sum_cos) = hues.iter().fold((0.0, 0.0), |(s, c), &h| {
        let angle = h as f64 * TAU / HUE_RANGE;
        (s + angle.sin(), c + angle.cos())
    });
    let mean_sin = sum_sin / n;
    let mean_cos = sum_cos / n;

    let mut mean_angle = mean_sin.atan2(mean_cos);
    if mean_angle < 0.0 {
        mean_angle += TAU;
    }

    let resultant_length = mean_sin.hypot(mean_cos);
    let spread = (-2.0 * (resultant_length + RESULTANT_EPSILON).ln())
        .max(0.0)
        .sqrt();

    Some(CircularStats {
        mean: mean_angle * HUE_RANGE / TAU,
        std: spread * 180.0 / PI,
        resultant_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_hue() {
        for h in [0u8, 17, 90, 179] {
            let stats = hue_statistics(&vec![h; 500]).unwrap();
            assert_abs_diff_eq!(stats.mean, h as f64, epsilon = 1e-9);
            assert_abs_diff_eq!(stats.std, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(stats.resultant_length, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mean_crosses_wrap_point() {
        // 170 and 10 are 20 codes apart across the wrap; their mean is 0, not 90.
        let stats = hue_statistics(&[170, 10]).unwrap();
        let distance_to_zero = stats.mean.min(HUE_RANGE - stats.mean);
        assert_abs_diff_eq!(distance_to_zero, 0.0, epsilon = 1e-9);
        assert!(stats.std > 0.0);
    }

    #[test]
    fn test_uniform_hues() {
        let hues: Vec<u8> = (0..180).collect();
        let stats = hue_statistics(&hues).unwrap();
        assert!(stats.resultant_length < 1e-9);
        let expected = (-2.0 * RESULTANT_EPSILON.ln()).sqrt() * 180.0 / PI;
        assert_abs_diff_eq!(stats.std, expected, epsilon = 1e-3);
        assert!(stats.std > 340.0);
    }

    #[test]
    fn test_mean_is_in_range() {
        let stats = hue_statistics(&[150, 160, 175]).unwrap();
        assert!(stats.mean >= 0.0 && stats.mean < HUE_RANGE);
        assert_abs_diff_eq!(stats.mean, 161.67, epsilon = 0.1);
    }

    #[test]
    fn test_empty() {
        assert!(hue_statistics(&[]).is_none());
    }
}
