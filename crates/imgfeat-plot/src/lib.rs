//! imgfeat Benchmark Plotter
//!
//! Reads the KD-Tree and VP-Tree experiment tables, slices them at a fixed
//! neighbour count, and draws comparison line charts as PNG files. A text
//! summary of balanced vs unbalanced KD-Tree search times is also available.
//!
//! Charts are described by plain data ([`ChartSpec`], [`Series`]) before
//! they are rasterized, so the plotted points can be inspected directly.
//!
//! # Example
//!
//! ```no_run
//! use imgfeat_plot::{plot_benchmarks, summarize, BenchmarkData};
//! use imgfeat_table::PlotConfig;
//!
//! let config = PlotConfig::default();
//! for chart in plot_benchmarks(&config).unwrap() {
//!     println!("{} {}", chart.path.display(), chart.hash);
//! }
//!
//! let data = BenchmarkData::load(&config.kd_path, &config.vp_path).unwrap();
//! print!("{}", summarize(&data).render());
//! ```

pub mod benchmark;
pub mod chart;
pub mod error;
pub mod font;
pub mod plotter;
pub mod png_out;
pub mod raster;
pub mod render;
pub mod summary;

pub use benchmark::{
    Axis, BalanceCategory, BenchmarkData, BenchmarkRecord, BenchmarkRow, Metric, TreeKind,
};
pub use chart::{category_charts, comparison_charts, ChartSpec, Point, Series};
pub use error::{PlotError, Result};
pub use plotter::{plot_all, plot_benchmarks, WrittenChart};
pub use render::{render_chart, RenderOptions};
pub use summary::{summarize, Summary, SummaryRow};
