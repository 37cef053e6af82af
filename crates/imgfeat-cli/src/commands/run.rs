//! Run command implementation
//!
//! Runs extract, normalize and reduce in sequence, each stage reading the
//! file the previous one wrote.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use imgfeat_table::PipelineConfig;

use super::{extract, normalize, reduce};

/// Run the three table stages with the paths from `config`.
pub fn run(config: &PipelineConfig) -> Result<ExitCode> {
    config.validate()?;
    let reduced_path = config.reduced_path();

    println!("{}", "=== imgfeat pipeline ===".cyan().bold());
    extract::extract_dataset(&config.media_dir, &config.dataset_path, config.header_layout)?;
    normalize::run(&config.dataset_path, &config.normalized_path)?;
    reduce::run(&config.normalized_path, &reduced_path, config.variance_retained)?;

    Ok(ExitCode::SUCCESS)
}
