//! Plot command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use imgfeat_plot::{plot_all, BenchmarkData};
use imgfeat_table::PlotConfig;

/// Draw the KD-Tree vs VP-Tree comparison charts.
pub fn run(config: &PlotConfig) -> Result<ExitCode> {
    println!(
        "{} {} + {}",
        "Plotting:".cyan().bold(),
        config.kd_path.display(),
        config.vp_path.display()
    );

    let data = BenchmarkData::load(&config.kd_path, &config.vp_path).with_context(|| {
        format!(
            "Failed to load benchmark results from {} and {}",
            config.kd_path.display(),
            config.vp_path.display()
        )
    })?;
    let written = plot_all(&data, &config.out_dir, config.k, config.dpi)
        .with_context(|| format!("Failed to write charts to {}", config.out_dir.display()))?;

    for chart in &written {
        println!(
            "  {} {} {}",
            "Wrote:".green(),
            chart.path.display(),
            chart.hash[..12].dimmed()
        );
    }
    println!(
        "{} {} charts in {}",
        "Done:".green().bold(),
        written.len(),
        config.out_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}
