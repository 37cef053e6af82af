//! Benchmark result tables produced by the KD-Tree and VP-Tree experiments.
//!
//! Both tables share the columns used here; the KD-Tree table adds a
//! `tipo_arbol` balance category. Any other columns are ignored.

use std::fmt;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;

/// Which index structure a row measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TreeKind {
    Kd,
    Vp,
}

impl TreeKind {
    pub fn label(self) -> &'static str {
        match self {
            TreeKind::Kd => "KD-Tree",
            TreeKind::Vp => "VP-Tree",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// KD-Tree construction strategy recorded in `tipo_arbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceCategory {
    Balanced,
    Unbalanced,
}

impl BalanceCategory {
    pub const ALL: [BalanceCategory; 2] = [BalanceCategory::Balanced, BalanceCategory::Unbalanced];

    /// Value stored in the CSV; also used in chart file names.
    pub fn key(self) -> &'static str {
        match self {
            BalanceCategory::Balanced => "balanceado",
            BalanceCategory::Unbalanced => "desbalanceado",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BalanceCategory::Balanced => "balanced",
            BalanceCategory::Unbalanced => "unbalanced",
        }
    }
}

/// One trial row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "dimensiones")]
    pub dimensions: u32,
    #[serde(rename = "datos_entrenamiento")]
    pub training_size: u64,
    #[serde(rename = "k_vecinos")]
    pub k: u32,
    #[serde(rename = "tipo_arbol", default)]
    pub balance: Option<String>,
    #[serde(rename = "tiempo_busqueda_nn_promedio_ns")]
    pub nn_time_ns: f64,
    #[serde(rename = "tiempo_busqueda_knn_promedio_ns")]
    pub knn_time_ns: f64,
    #[serde(rename = "profundidad_arbol")]
    pub depth: f64,
    #[serde(rename = "memoria_estimada_kb")]
    pub memory_kb: f64,
    #[serde(rename = "tiempo_construccion_ns")]
    pub build_time_ns: f64,
}

impl BenchmarkRecord {
    pub fn is_category(&self, category: BalanceCategory) -> bool {
        self.balance.as_deref().map(str::trim) == Some(category.key())
    }
}

/// A record tagged with the table it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub tree: TreeKind,
    pub record: BenchmarkRecord,
}

/// Quantity plotted on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    NnTime,
    KnnTime,
    Depth,
    Memory,
    BuildTime,
}

impl Metric {
    pub fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Metric::NnTime => record.nn_time_ns,
            Metric::KnnTime => record.knn_time_ns,
            Metric::Depth => record.depth,
            Metric::Memory => record.memory_kb,
            Metric::BuildTime => record.build_time_ns,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::NnTime | Metric::KnnTime | Metric::BuildTime => "Time (ns)",
            Metric::Depth => "Depth",
            Metric::Memory => "Memory (KB)",
        }
    }
}

/// Quantity plotted on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Dimensions,
    TrainingSize,
}

impl Axis {
    pub fn value(self, record: &BenchmarkRecord) -> f64 {
        match self {
            Axis::Dimensions => record.dimensions as f64,
            Axis::TrainingSize => record.training_size as f64,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::Dimensions => "Dimensions",
            Axis::TrainingSize => "Training size",
        }
    }
}

/// Both benchmark tables, concatenated KD rows first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkData {
    rows: Vec<BenchmarkRow>,
}

impl BenchmarkData {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self { rows }
    }

    /// Load and tag the KD-Tree and VP-Tree result files.
    pub fn load(kd_path: &Path, vp_path: &Path) -> Result<Self> {
        let mut data = Self::default();
        data.extend_from_reader(TreeKind::Kd, std::fs::File::open(kd_path)?)?;
        data.extend_from_reader(TreeKind::Vp, std::fs::File::open(vp_path)?)?;
        debug!(
            "loaded {} benchmark rows from {} and {}",
            data.rows.len(),
            kd_path.display(),
            vp_path.display()
        );
        Ok(data)
    }

    /// Append every row of a CSV table, tagged with `tree`.
    pub fn extend_from_reader<R: Read>(&mut self, tree: TreeKind, reader: R) -> Result<()> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        for record in rdr.deserialize() {
            self.rows.push(BenchmarkRow {
                tree,
                record: record?,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest dimensionality over both tables.
    pub fn fixed_dimensions(&self) -> Option<u32> {
        self.rows.iter().map(|r| r.record.dimensions).min()
    }

    /// Largest training-set size over both tables.
    pub fn fixed_training_size(&self) -> Option<u64> {
        self.rows.iter().map(|r| r.record.training_size).max()
    }

    /// Rows at neighbour count `k` and the largest training size.
    pub fn dimension_slice(&self, k: u32) -> Vec<&BenchmarkRow> {
        let Some(n) = self.fixed_training_size() else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter(|r| r.record.k == k && r.record.training_size == n)
            .collect()
    }

    /// Rows at neighbour count `k` and the smallest dimensionality.
    pub fn size_slice(&self, k: u32) -> Vec<&BenchmarkRow> {
        let Some(d) = self.fixed_dimensions() else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter(|r| r.record.k == k && r.record.dimensions == d)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KD_CSV: &str = "\
dimensiones,datos_entrenamiento,datos_busqueda,k_vecinos,tipo_arbol,tiempo_construccion_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,factor_balance,memoria_estimada_kb
2,100,10,1,balanceado,500,10,20,7,1.0,4.5
2,200,10,1,desbalanceado,900,12,25,15,0.4,9.0
4,200,10,5,balanceado,950,30,60,8,1.0,9.5
";

    const VP_CSV: &str = "\
dimensiones,datos_entrenamiento,k_vecinos,tiempo_construccion_ns,tiempo_busqueda_nn_promedio_ns,tiempo_busqueda_knn_promedio_ns,profundidad_arbol,memoria_estimada_kb,tasa_poda
3,200,1,700,11,22,9,8.0,0.5
";

    fn sample() -> BenchmarkData {
        let mut data = BenchmarkData::default();
        data.extend_from_reader(TreeKind::Kd, KD_CSV.as_bytes()).unwrap();
        data.extend_from_reader(TreeKind::Vp, VP_CSV.as_bytes()).unwrap();
        data
    }

    #[test]
    fn test_tables_are_tagged_and_concatenated() {
        let data = sample();
        let kinds: Vec<TreeKind> = data.rows().iter().map(|r| r.tree).collect();
        assert_eq!(kinds, vec![TreeKind::Kd, TreeKind::Kd, TreeKind::Kd, TreeKind::Vp]);
        assert_eq!(data.rows()[3].record.balance, None);
        assert!(data.rows()[0].record.is_category(BalanceCategory::Balanced));
        assert!(data.rows()[1].record.is_category(BalanceCategory::Unbalanced));
    }

    #[test]
    fn test_fixed_values_span_both_tables() {
        let data = sample();
        assert_eq!(data.fixed_dimensions(), Some(2));
        assert_eq!(data.fixed_training_size(), Some(200));
    }

    #[test]
    fn test_slices() {
        let data = sample();
        let dims: Vec<(TreeKind, u32)> = data
            .dimension_slice(1)
            .iter()
            .map(|r| (r.tree, r.record.dimensions))
            .collect();
        assert_eq!(dims, vec![(TreeKind::Kd, 2), (TreeKind::Vp, 3)]);

        let sizes: Vec<u64> = data
            .size_slice(1)
            .iter()
            .map(|r| r.record.training_size)
            .collect();
        assert_eq!(sizes, vec![100, 200]);
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let mut data = BenchmarkData::default();
        let err = data
            .extend_from_reader(TreeKind::Vp, "dimensiones,k_vecinos\n2,1\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, crate::error::PlotError::Csv(_)));
    }

    #[test]
    fn test_empty_data_has_empty_slices() {
        let data = BenchmarkData::default();
        assert!(data.dimension_slice(1).is_empty());
        assert!(data.size_slice(1).is_empty());
    }
}
