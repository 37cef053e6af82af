//! Principal-component reduction with a variance-retention target.
//!
//! The number of components is chosen from the data: the smallest `n` whose
//! cumulative explained-variance ratio reaches the configured fraction.

use imgfeat_table::config::DEFAULT_VARIANCE_RETAINED;
use imgfeat_table::DatasetTable;
use log::{debug, info};
use nalgebra::{DMatrix, SymmetricEigen};

use crate::error::{Result, StatsError};

/// Rounding slack allowed when a cumulative ratio is compared to the target.
const RATIO_TOLERANCE: f64 = 1e-12;

/// Builder for [`Pca`].
#[derive(Debug, Clone)]
pub struct PcaBuilder {
    variance_retained: f64,
}

impl Default for PcaBuilder {
    fn default() -> Self {
        Self {
            variance_retained: DEFAULT_VARIANCE_RETAINED,
        }
    }
}

impl PcaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of total variance the kept components must explain, in `(0, 1]`.
    pub fn variance_retained(mut self, fraction: f64) -> Self {
        self.variance_retained = fraction;
        self
    }

    pub fn build(self) -> Pca {
        Pca {
            variance_retained: self.variance_retained,
        }
    }
}

/// Unfitted PCA configuration.
#[derive(Debug, Clone)]
pub struct Pca {
    variance_retained: f64,
}

impl Default for Pca {
    fn default() -> Self {
        PcaBuilder::default().build()
    }
}

/// A fitted projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PcaModel {
    /// Column means of the fitted table.
    pub mean: Vec<f64>,
    /// One unit-length loading vector per kept component, in component order.
    pub components: Vec<Vec<f64>>,
    /// Explained-variance ratio of each kept component.
    pub explained_variance_ratio: Vec<f64>,
}

/// Output of [`Pca::fit_transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// Projected rows with columns `PC1..PCn`.
    pub table: DatasetTable,
    pub n_components: usize,
    pub explained_variance_ratio: Vec<f64>,
}

impl Pca {
    pub fn builder() -> PcaBuilder {
        PcaBuilder::new()
    }

    pub fn variance_retained(&self) -> f64 {
        self.variance_retained
    }

    /// Fit the projection on `table`.
    pub fn fit(&self, table: &DatasetTable) -> Result<PcaModel> {
        let target = self.variance_retained;
        if !(target > 0.0 && target <= 1.0) {
            return Err(StatsError::InvalidThreshold(target));
        }
        if table.len() < 2 {
            return Err(StatsError::NotEnoughSamples {
                required: 2,
                actual: table.len(),
            });
        }
        if table.ncols() == 0 {
            return Err(StatsError::NoFeatures);
        }
        check_finite(table)?;

        let n = table.len();
        let p = table.ncols();
        let data = DMatrix::from_fn(n, p, |r, c| table.rows()[r][c]);
        let mean: Vec<f64> = data.column_iter().map(|col| col.mean()).collect();
        let centered = DMatrix::from_fn(n, p, |r, c| data[(r, c)] - mean[c]);

        let covariance = (centered.transpose() * &centered) / (n - 1) as f64;
        let eigen = SymmetricEigen::new(covariance);

        let mut order: Vec<usize> = (0..p).collect();
        order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

        let variances: Vec<f64> = order
            .iter()
            .map(|&i| eigen.eigenvalues[i].max(0.0))
            .collect();
        let total: f64 = variances.iter().sum();
        let ratios: Vec<f64> = if total > 0.0 {
            variances.iter().map(|v| v / total).collect()
        } else {
            vec![0.0; p]
        };

        let n_components = components_for_target(&ratios, target);
        debug!(
            "eigenvalues {:?}, keeping {} of {} components",
            variances, n_components, p
        );

        let components = order
            .iter()
            .take(n_components)
            .map(|&i| oriented(eigen.eigenvectors.column(i).iter().copied().collect()))
            .collect();

        Ok(PcaModel {
            mean,
            components,
            explained_variance_ratio: ratios[..n_components].to_vec(),
        })
    }

    /// Fit on `table` and project it.
    pub fn fit_transform(&self, table: &DatasetTable) -> Result<Reduction> {
        let model = self.fit(table)?;
        let projected = model.transform(table)?;
        info!(
            "PCA kept {} components explaining {:.4} of the variance",
            model.n_components(),
            model.explained_variance_ratio.iter().sum::<f64>()
        );
        Ok(Reduction {
            table: projected,
            n_components: model.n_components(),
            explained_variance_ratio: model.explained_variance_ratio,
        })
    }
}

impl PcaModel {
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Project the rows of `table` onto the kept components.
    pub fn transform(&self, table: &DatasetTable) -> Result<DatasetTable> {
        if table.ncols() != self.mean.len() {
            return Err(StatsError::ShapeMismatch {
                expected: self.mean.len(),
                actual: table.ncols(),
            });
        }

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                self.components
                    .iter()
                    .map(|loading| {
                        row.iter()
                            .zip(&self.mean)
                            .zip(loading)
                            .map(|((v, m), w)| (v - m) * w)
                            .sum::<f64>()
                    })
                    .collect::<Vec<f64>>()
            })
            .collect();

        Ok(DatasetTable::from_parts(
            component_names(self.n_components()),
            table.ids().to_vec(),
            rows,
        )?)
    }
}

/// `PC1`, `PC2`, ...
pub fn component_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("PC{}", i)).collect()
}

/// Smallest count whose cumulative ratio reaches `target`. At least one.
fn components_for_target(ratios: &[f64], target: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, ratio) in ratios.iter().enumerate() {
        cumulative += ratio;
        if cumulative >= target - RATIO_TOLERANCE {
            return i + 1;
        }
    }
    ratios.len().max(1)
}

/// Flip the vector so its largest-magnitude entry is positive.
fn oriented(mut loading: Vec<f64>) -> Vec<f64> {
    let pivot = loading
        .iter()
        .copied()
        .fold(0.0f64, |best, v| if v.abs() > best.abs() { v } else { best });
    if pivot < 0.0 {
        for w in &mut loading {
            *w = -*w;
        }
    }
    loading
}

fn check_finite(table: &DatasetTable) -> Result<()> {
    for (id, row) in table.iter() {
        if let Some(c) = row.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFinite {
                id: id.to_string(),
                column: table.columns()[c].clone(),
            });
        }
    }
    Ok(())
}
