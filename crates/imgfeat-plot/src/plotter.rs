//! Render every comparison chart into an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use imgfeat_table::PlotConfig;
use log::{info, warn};

use crate::benchmark::BenchmarkData;
use crate::chart::comparison_charts;
use crate::error::Result;
use crate::png_out::encode_png_with_hash;
use crate::render::{render_chart, RenderOptions};

/// A chart written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenChart {
    pub path: PathBuf,
    pub hash: String,
}

/// Draw all charts for `data` into `out_dir`, creating it if needed.
///
/// Every chart is written; one without data points is drawn as empty axes.
pub fn plot_all(
    data: &BenchmarkData,
    out_dir: &Path,
    k: u32,
    dpi: u32,
) -> Result<Vec<WrittenChart>> {
    fs::create_dir_all(out_dir)?;
    let options = RenderOptions { dpi };

    let mut written = Vec::new();
    for spec in comparison_charts(data, k) {
        if spec.is_empty() {
            warn!("no data for {}, drawing empty axes", spec.file_name);
        }
        let canvas = render_chart(&spec, &options)?;
        let path = out_dir.join(&spec.file_name);
        let (bytes, hash) = encode_png_with_hash(&canvas, dpi)?;
        fs::write(&path, bytes)?;
        info!("wrote {}", path.display());
        written.push(WrittenChart { path, hash });
    }
    Ok(written)
}

/// Load the two result tables named in `config` and plot them.
pub fn plot_benchmarks(config: &PlotConfig) -> Result<Vec<WrittenChart>> {
    let data = BenchmarkData::load(&config.kd_path, &config.vp_path)?;
    plot_all(&data, &config.out_dir, config.k, config.dpi)
}
