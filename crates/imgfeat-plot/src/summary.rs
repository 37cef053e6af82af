//! Text summary of balanced vs unbalanced KD-Tree search times.

use std::collections::BTreeMap;
use std::fmt;

use crate::benchmark::{BalanceCategory, BenchmarkData, BenchmarkRecord, TreeKind};

/// Mean search times at one dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub dimensions: u32,
    pub balanced: f64,
    pub unbalanced: f64,
    /// `(unbalanced - balanced) / unbalanced * 100`.
    pub improvement_pct: f64,
    /// VP-Tree mean at the same dimensionality, when measured.
    pub vp_tree: Option<f64>,
}

/// Per-dimension tables for NN and k-NN search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub nn: Vec<SummaryRow>,
    pub knn: Vec<SummaryRow>,
}

#[derive(Default)]
struct Accumulator {
    balanced: Vec<f64>,
    unbalanced: Vec<f64>,
    vp: Vec<f64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn table(data: &BenchmarkData, metric: fn(&BenchmarkRecord) -> f64) -> Vec<SummaryRow> {
    let mut by_dim: BTreeMap<u32, Accumulator> = BTreeMap::new();
    for row in data.rows() {
        let acc = by_dim.entry(row.record.dimensions).or_default();
        let value = metric(&row.record);
        match row.tree {
            TreeKind::Vp => acc.vp.push(value),
            TreeKind::Kd if row.record.is_category(BalanceCategory::Balanced) => {
                acc.balanced.push(value)
            }
            TreeKind::Kd => acc.unbalanced.push(value),
        }
    }

    by_dim
        .into_iter()
        .filter_map(|(dimensions, acc)| {
            let balanced = mean(&acc.balanced)?;
            let unbalanced = mean(&acc.unbalanced)?;
            Some(SummaryRow {
                dimensions,
                balanced,
                unbalanced,
                improvement_pct: (unbalanced - balanced) / unbalanced * 100.0,
                vp_tree: mean(&acc.vp),
            })
        })
        .collect()
}

/// Build both summary tables. Every row of `data` is used, whatever its
/// `k` or training size. Dimensions lacking either KD category are omitted.
pub fn summarize(data: &BenchmarkData) -> Summary {
    Summary {
        nn: table(data, |r| r.nn_time_ns),
        knn: table(data, |r| r.knn_time_ns),
    }
}

const RULE_WIDTH: usize = 68;

fn write_section(f: &mut fmt::Formatter<'_>, heading: &str, rows: &[SummaryRow]) -> fmt::Result {
    writeln!(f, "{}", heading)?;
    writeln!(
        f,
        "{:>9} | {:>10} | {:>13} | {:>8} | {:>10}",
        "Dimension", "Balanced", "Unbalanced", "Gain %", "VP-Tree"
    )?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
    for row in rows {
        let vp = row
            .vp_tree
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "{:>9} | {:>10.2} | {:>13.2} | {:>7.1}% | {:>10}",
            row.dimensions, row.balanced, row.unbalanced, row.improvement_pct, vp
        )?;
    }
    Ok(())
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== KD-TREE BENCHMARK SUMMARY ===")?;
        writeln!(f)?;
        write_section(f, "MEAN NN SEARCH TIME BY DIMENSION (ns):", &self.nn)?;
        writeln!(f)?;
        write_section(f, "MEAN kNN SEARCH TIME BY DIMENSION (ns):", &self.knn)
    }
}

impl Summary {
    /// Fixed-width text report.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
