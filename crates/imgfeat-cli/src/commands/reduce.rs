//! Reduce command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use imgfeat_stats::Pca;
use imgfeat_table::{read_table_file, write_table_file};

/// Fit a PCA keeping `variance_retained` of the variance and write the scores.
pub fn run(input: &Path, output: &Path, variance_retained: f64) -> Result<ExitCode> {
    println!(
        "{} {} (keeping {:.0}% of variance)",
        "Reducing:".cyan().bold(),
        input.display(),
        variance_retained * 100.0
    );

    let table = read_table_file(input)
        .with_context(|| format!("Failed to read dataset: {}", input.display()))?;
    let reduction = Pca::builder()
        .variance_retained(variance_retained)
        .build()
        .fit_transform(&table)
        .with_context(|| format!("PCA failed on {}", input.display()))?;

    write_table_file(&reduction.table, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let kept: f64 = reduction.explained_variance_ratio.iter().sum();
    println!(
        "{} {} components explain {:.2}% of the variance",
        "PCA:".blue().bold(),
        reduction.n_components,
        kept * 100.0
    );
    println!(
        "{} {} rows to {}",
        "Wrote:".green().bold(),
        reduction.table.len(),
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}
