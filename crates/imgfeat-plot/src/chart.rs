//! Chart descriptions: what to draw, independent of pixels.

use std::collections::BTreeMap;

use crate::benchmark::{Axis, BalanceCategory, BenchmarkData, BenchmarkRow, Metric, TreeKind};

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    /// Sorted by `x`, one point per distinct `x`.
    pub points: Vec<Point>,
}

impl Series {
    /// Aggregate `(x, y)` samples: samples sharing an `x` are averaged.
    pub fn from_samples(
        label: impl Into<String>,
        samples: impl IntoIterator<Item = (f64, f64)>,
    ) -> Self {
        let mut groups: BTreeMap<u64, (f64, f64, usize)> = BTreeMap::new();
        for (x, y) in samples {
            let entry = groups.entry(order_key(x)).or_insert((x, 0.0, 0));
            entry.1 += y;
            entry.2 += 1;
        }
        let points = groups
            .into_values()
            .map(|(x, sum, count)| Point {
                x,
                y: sum / count as f64,
            })
            .collect();
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Maps a float to a key whose unsigned order matches the float order.
fn order_key(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

/// Everything needed to render and save one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Output file name, relative to the chart directory.
    pub file_name: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }
}

struct ChartKind {
    axis: Axis,
    metric: Metric,
    file_stem: &'static str,
    title: &'static str,
}

const CHART_KINDS: [ChartKind; 5] = [
    ChartKind {
        axis: Axis::Dimensions,
        metric: Metric::NnTime,
        file_stem: "tiempo_nn_dim",
        title: "NN search time vs dimensions",
    },
    ChartKind {
        axis: Axis::Dimensions,
        metric: Metric::KnnTime,
        file_stem: "tiempo_knn_dim",
        title: "kNN search time vs dimensions",
    },
    ChartKind {
        axis: Axis::TrainingSize,
        metric: Metric::Depth,
        file_stem: "profundidad_size",
        title: "Tree depth vs training size",
    },
    ChartKind {
        axis: Axis::TrainingSize,
        metric: Metric::Memory,
        file_stem: "memoria_size",
        title: "Memory usage vs training size",
    },
    ChartKind {
        axis: Axis::TrainingSize,
        metric: Metric::BuildTime,
        file_stem: "construccion_size",
        title: "Construction time vs training size",
    },
];

fn series_for(rows: &[&BenchmarkRow], tree: TreeKind, axis: Axis, metric: Metric) -> Series {
    Series::from_samples(
        tree.label(),
        rows.iter()
            .filter(|r| r.tree == tree)
            .map(|r| (axis.value(&r.record), metric.value(&r.record))),
    )
}

/// The five KD-vs-VP charts for one balance category.
///
/// KD-Tree rows are restricted to `category`; VP-Tree rows are not split.
/// Series without points are left out.
pub fn category_charts(data: &BenchmarkData, k: u32, category: BalanceCategory) -> Vec<ChartSpec> {
    let by_dimension = data.dimension_slice(k);
    let by_size = data.size_slice(k);

    CHART_KINDS
        .iter()
        .map(|kind| {
            let slice = match kind.axis {
                Axis::Dimensions => &by_dimension,
                Axis::TrainingSize => &by_size,
            };
            let kd_rows: Vec<&BenchmarkRow> = slice
                .iter()
                .copied()
                .filter(|r| r.tree == TreeKind::Kd && r.record.is_category(category))
                .collect();

            let series = [
                series_for(&kd_rows, TreeKind::Kd, kind.axis, kind.metric),
                series_for(slice, TreeKind::Vp, kind.axis, kind.metric),
            ]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

            ChartSpec {
                title: format!("{} (KD {} vs VP)", kind.title, category.label()),
                x_label: kind.axis.label().to_string(),
                y_label: kind.metric.axis_label().to_string(),
                file_name: format!("{}_kd_{}_vs_vp.png", kind.file_stem, category.key()),
                series,
            }
        })
        .collect()
}

/// Every chart, balanced category first.
pub fn comparison_charts(data: &BenchmarkData, k: u32) -> Vec<ChartSpec> {
    BalanceCategory::ALL
        .iter()
        .flat_map(|&category| category_charts(data, k, category))
        .collect()
}
