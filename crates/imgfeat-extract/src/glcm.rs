//! Gray-level co-occurrence matrix and its second-order statistics.
//!
//! The matrix counts horizontally adjacent pixel pairs (distance 1, angle 0),
//! is made symmetric by adding its transpose, and is normalized to sum to 1.

use crate::error::FeatureError;

/// Number of gray levels after quantization.
pub const GLCM_LEVELS: usize = 16;

/// Divisor mapping 8-bit gray to `GLCM_LEVELS` levels.
const QUANT_STEP: u8 = (256 / GLCM_LEVELS) as u8;

/// Standard deviations below this make the correlation degenerate.
const CORRELATION_STD_FLOOR: f64 = 1e-15;

/// Texture statistics derived from a normalized GLCM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlcmProperties {
    pub contrast: f64,
    pub dissimilarity: f64,
    pub homogeneity: f64,
    /// Angular second moment.
    pub asm: f64,
    pub correlation: f64,
}

/// A symmetric, normalized co-occurrence matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Glcm {
    levels: usize,
    p: Vec<f64>,
}

impl Glcm {
    /// Build the matrix from a row-major 8-bit grayscale image.
    pub fn from_gray(gray: &[u8], width: u32, height: u32) -> Result<Self, FeatureError> {
        if width == 0 || height == 0 || gray.is_empty() {
            return Err(FeatureError::EmptyImage);
        }
        if width < 2 {
            return Err(FeatureError::NoPixelPairs { width, height });
        }

        let levels = GLCM_LEVELS;
        let mut counts = vec![0u64; levels * levels];
        for row in gray.chunks_exact(width as usize) {
            for pair in row.windows(2) {
                let i = (pair[0] / QUANT_STEP) as usize;
                let j = (pair[1] / QUANT_STEP) as usize;
                counts[i * levels + j] += 1;
                counts[j * levels + i] += 1;
            }
        }

        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Err(FeatureError::NoPixelPairs { width, height });
        }
        let p = counts
            .into_iter()
            .map(|c| c as f64 / total as f64)
            .collect();

        Ok(Self { levels, p })
    }

    /// Number of gray levels (matrix side length).
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Probability of the pair `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.p[i * self.levels + j]
    }

    fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let levels = self.levels;
        self.p
            .iter()
            .enumerate()
            .map(move |(idx, &p)| ((idx / levels) as f64, (idx % levels) as f64, p))
    }

    /// Compute all five texture statistics.
    pub fn properties(&self) -> GlcmProperties {
        let mut contrast = 0.0;
        let mut dissimilarity = 0.0;
        let mut homogeneity = 0.0;
        let mut asm = 0.0;
        let mut mean_i = 0.0;
        let mut mean_j = 0.0;

        for (i, j, p) in self.cells() {
            let d = i - j;
            contrast += p * d * d;
            dissimilarity += p * d.abs();
            homogeneity += p / (1.0 + d * d);
            asm += p * p;
            mean_i += p * i;
            mean_j += p * j;
        }

        let mut var_i = 0.0;
        let mut var_j = 0.0;
        let mut cov = 0.0;
        for (i, j, p) in self.cells() {
            let di = i - mean_i;
            let dj = j - mean_j;
            var_i += p * di * di;
            var_j += p * dj * dj;
            cov += p * di * dj;
        }
        let std_i = var_i.sqrt();
        let std_j = var_j.sqrt();

        let correlation = if std_i < CORRELATION_STD_FLOOR || std_j < CORRELATION_STD_FLOOR {
            1.0
        } else {
            cov / (std_i * std_j)
        };

        GlcmProperties {
            contrast,
            dissimilarity,
            homogeneity,
            asm,
            correlation,
        }
    }
}
