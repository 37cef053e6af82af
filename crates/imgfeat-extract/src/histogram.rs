//! Gray-level histogram entropy.

/// Added inside the logarithm so empty bins contribute zero instead of NaN.
const LOG_EPSILON: f64 = 1e-10;

/// 256-bin histogram of 8-bit samples.
pub fn histogram(gray: &[u8]) -> [u64; 256] {
    let mut bins = [0u64; 256];
    for &g in gray {
        bins[g as usize] += 1;
    }
    bins
}

/// Shannon entropy in bits of the gray-level distribution.
///
/// Ranges from 0 for a constant image up to 8 for a perfectly flat
/// histogram. An empty sample has entropy 0.
pub fn shannon_entropy(gray: &[u8]) -> f64 {
    if gray.is_empty() {
        return 0.0;
    }
    let n = gray.len() as f64;
    let entropy = -histogram(gray)
        .iter()
        .map(|&count| {
            let p = count as f64 / n;
            p * (p + LOG_EPSILON).log2()
        })
        .sum::<f64>();
    entropy.max(0.0)
}
