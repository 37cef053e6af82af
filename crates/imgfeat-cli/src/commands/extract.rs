//! Extract command implementation
//!
//! Scans an image directory and writes one feature row per decodable image.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use imgfeat_extract::{CsvRecordSink, ExtractReport, Extractor, Outcome};
use imgfeat_table::HeaderLayout;

/// Run the extract command
///
/// # Arguments
/// * `input_dir` - Directory scanned (non-recursively) for images
/// * `output` - Dataset CSV to create
/// * `layout` - Header labelling for the feature columns
///
/// # Returns
/// Exit code 0 even when some images were skipped; 1 only if the run failed.
pub fn run(input_dir: &Path, output: &Path, layout: HeaderLayout) -> Result<ExitCode> {
    extract_dataset(input_dir, output, layout)?;
    Ok(ExitCode::SUCCESS)
}

/// Extract features and return the report; shared with the `run` command.
pub fn extract_dataset(
    input_dir: &Path,
    output: &Path,
    layout: HeaderLayout,
) -> Result<ExtractReport> {
    println!("{} {}", "Extracting:".cyan().bold(), input_dir.display());

    let mut sink = CsvRecordSink::create(output, layout)
        .with_context(|| format!("Failed to create dataset file: {}", output.display()))?;

    let report = Extractor::new(input_dir)
        .run_with(&mut sink, |outcome| {
            if let Outcome::Skipped(skipped) = outcome {
                let name = skipped
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| skipped.path.display().to_string());
                println!("{} processing {}: {}", "error".red(), name, skipped.reason);
            }
        })
        .with_context(|| format!("Failed to extract features from {}", input_dir.display()))?;

    sink.finish()
        .with_context(|| format!("Failed to write dataset file: {}", output.display()))?;

    println!(
        "{} {} rows to {} ({} skipped)",
        "Wrote:".green().bold(),
        report.written,
        output.display(),
        report.skipped.len()
    );
    Ok(report)
}
