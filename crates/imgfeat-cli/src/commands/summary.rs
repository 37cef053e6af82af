//! Summary command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use imgfeat_plot::{summarize, BenchmarkData};

/// Print (or write) the balanced vs unbalanced search-time report.
pub fn run(kd_path: &Path, vp_path: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let data = BenchmarkData::load(kd_path, vp_path).with_context(|| {
        format!(
            "Failed to load benchmark results from {} and {}",
            kd_path.display(),
            vp_path.display()
        )
    })?;
    let report = summarize(&data).render();

    match output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write summary: {}", path.display()))?;
            println!("{} {}", "Wrote:".green().bold(), path.display());
        }
        None => print!("{}", report),
    }
    Ok(ExitCode::SUCCESS)
}
