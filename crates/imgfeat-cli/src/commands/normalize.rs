//! Normalize command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use imgfeat_stats::StandardScaler;
use imgfeat_table::{read_table_file, write_table_file};

/// Standardize every feature column of `input` and write `output`.
pub fn run(input: &Path, output: &Path) -> Result<ExitCode> {
    println!("{} {}", "Normalizing:".cyan().bold(), input.display());

    let table = read_table_file(input)
        .with_context(|| format!("Failed to read dataset: {}", input.display()))?;
    let scaler = StandardScaler::fit(&table)
        .with_context(|| format!("Failed to fit scaler on {}", input.display()))?;

    let flat: Vec<&str> = table
        .columns()
        .iter()
        .zip(scaler.std())
        .filter(|(_, std)| **std == 0.0)
        .map(|(name, _)| name.as_str())
        .collect();
    if !flat.is_empty() {
        println!(
            "{} zero-variance columns will be NaN: {}",
            "warning:".yellow().bold(),
            flat.join(", ")
        );
    }

    let normalized = scaler.transform(&table)?;
    write_table_file(&normalized, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} rows to {}",
        "Wrote:".green().bold(),
        normalized.len(),
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}
