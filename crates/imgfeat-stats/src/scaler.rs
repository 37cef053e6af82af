//! Column-wise standardization.

use imgfeat_table::DatasetTable;
use log::debug;

use crate::error::{Result, StatsError};

/// Per-column mean and population standard deviation.
///
/// A column with zero spread transforms to NaN (or ±inf); that outcome is
/// left visible rather than masked.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Learn column statistics from every row of `table`.
    pub fn fit(table: &DatasetTable) -> Result<Self> {
        if table.is_empty() {
            return Err(StatsError::NotEnoughSamples {
                required: 1,
                actual: 0,
            });
        }

        let n = table.len() as f64;
        let ncols = table.ncols();
        let mut mean = vec![0.0; ncols];
        for row in table.rows() {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut var = vec![0.0; ncols];
        for row in table.rows() {
            for ((acc, v), m) in var.iter_mut().zip(row).zip(&mean) {
                let d = v - m;
                *acc += d * d;
            }
        }
        let mut std: Vec<f64> = var.into_iter().map(|v| (v / n).sqrt()).collect();

        // Summation can leave a one-ulp residue on a constant column.
        for (c, s) in std.iter_mut().enumerate() {
            if is_constant(table, c) {
                *s = 0.0;
            }
        }

        for (name, s) in table.columns().iter().zip(&std) {
            if *s == 0.0 {
                debug!("column '{}' has zero variance", name);
            }
        }

        Ok(Self { mean, std })
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn std(&self) -> &[f64] {
        &self.std
    }

    /// Standardize `table` with the fitted statistics, returning a new table.
    pub fn transform(&self, table: &DatasetTable) -> Result<DatasetTable> {
        if table.ncols() != self.mean.len() {
            return Err(StatsError::ShapeMismatch {
                expected: self.mean.len(),
                actual: table.ncols(),
            });
        }

        let rows: Vec<Vec<f64>> = table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.mean.iter().zip(&self.std))
                    .map(|(v, (m, s))| (v - m) / s)
                    .collect()
            })
            .collect();

        Ok(DatasetTable::from_parts(
            table.columns().to_vec(),
            table.ids().to_vec(),
            rows,
        )?)
    }

    /// Fit on `table` and standardize it.
    pub fn fit_transform(table: &DatasetTable) -> Result<DatasetTable> {
        Self::fit(table)?.transform(table)
    }
}

fn is_constant(table: &DatasetTable, column: usize) -> bool {
    let mut values = table.rows().iter().map(|row| row[column]);
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn random_table(rows: usize, cols: usize, seed: u64) -> DatasetTable {
        let mut rng = Pcg32::seed_from_u64(seed);
        let columns = (0..cols).map(|c| format!("f{}", c)).collect();
        let mut table = DatasetTable::new(columns);
        for r in 0..rows {
            let values: Vec<f64> = (0..cols)
                .map(|c| rng.gen_range(-50.0..50.0) * (c + 1) as f64 + c as f64 * 100.0)
                .collect();
            table.push(format!("img{}", r), &values).unwrap();
        }
        table
    }

    #[test]
    fn test_columns_have_zero_mean_unit_std() {
        let table = random_table(40, 5, 3);
        let out = StandardScaler::fit_transform(&table).unwrap();

        for c in 0..out.ncols() {
            let col = out.column(c);
            let n = col.len() as f64;
            let mean = col.iter().sum::<f64>() / n;
            let std = (col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
            assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(std, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ids_and_columns_pass_through() {
        let table = random_table(6, 3, 9);
        let out = StandardScaler::fit_transform(&table).unwrap();
        assert_eq!(out.ids(), table.ids());
        assert_eq!(out.columns(), table.columns());
    }

    #[test]
    fn test_known_values() {
        let mut table = DatasetTable::new(vec!["x".into()]);
        for (id, v) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
            table.push(id, &[v]).unwrap();
        }
        let scaler = StandardScaler::fit(&table).unwrap();
        assert_abs_diff_eq!(scaler.mean()[0], 2.0);
        assert_abs_diff_eq!(scaler.std()[0], (2.0f64 / 3.0).sqrt());

        let out = scaler.transform(&table).unwrap();
        assert_abs_diff_eq!(out.rows()[0][0], -(1.5f64).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(out.rows()[1][0], 0.0);
    }

    #[test]
    fn test_constant_column_becomes_nan() {
        let mut table = DatasetTable::new(vec!["flat".into(), "varied".into()]);
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            table.push(*id, &[7.0, i as f64]).unwrap();
        }
        let out = StandardScaler::fit_transform(&table).unwrap();
        assert!(out.column(0).iter().all(|v| v.is_nan()));
        assert!(out.column(1).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_constant_column_with_inexact_mean_becomes_nan() {
        // 0.1 * 3 / 3 does not give back 0.1 exactly.
        let mut table = DatasetTable::new(vec!["flat".into(), "luma".into(), "varied".into()]);
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            table.push(*id, &[0.1, 76.245, i as f64]).unwrap();
        }
        let scaler = StandardScaler::fit(&table).unwrap();
        assert_eq!(scaler.std()[0], 0.0);
        assert_eq!(scaler.std()[1], 0.0);

        let out = scaler.transform(&table).unwrap();
        assert!(out.column(0).iter().all(|v| v.is_nan()));
        assert!(out.column(1).iter().all(|v| v.is_nan()));
        assert!(out.column(2).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let table = DatasetTable::new(vec!["x".into()]);
        assert!(matches!(
            StandardScaler::fit(&table),
            Err(StatsError::NotEnoughSamples { required: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let scaler = StandardScaler::fit(&random_table(4, 3, 1)).unwrap();
        let err = scaler.transform(&random_table(4, 2, 1)).unwrap_err();
        assert!(matches!(err, StatsError::ShapeMismatch { expected: 3, actual: 2 }));
    }
}
