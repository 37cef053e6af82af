//! Population mean and standard deviation.

/// Mean and population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std: f64,
}

/// Two-pass mean/std over any numeric sample. Returns `None` when empty.
pub fn moments<T>(values: &[T]) -> Option<Moments>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v.into()).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let diff = v.into() - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Some(Moments {
        mean,
        std: variance.sqrt(),
    })
}
