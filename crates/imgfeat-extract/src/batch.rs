//! Directory-level extraction.
//!
//! Every regular file directly inside the input directory is treated as a
//! candidate image. Files are processed in the order the filesystem lists
//! them; nothing is sorted. A file that fails to load or process becomes a
//! [`Skipped`] entry and the batch carries on.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{ExtractError, FeatureError};
use crate::features::extract_features;
use crate::sink::RecordSink;

/// An image that produced no record.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: FeatureError,
}

/// What happened to one input file.
#[derive(Debug)]
pub enum Outcome {
    Extracted { path: PathBuf, id: String },
    Skipped(Skipped),
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Records handed to the sink.
    pub written: usize,
    /// Files that were skipped, in processing order.
    pub skipped: Vec<Skipped>,
}

/// Runs feature extraction over one directory.
#[derive(Debug, Clone)]
pub struct Extractor {
    input_dir: PathBuf,
}

impl Extractor {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// List candidate files without processing them.
    ///
    /// Unreadable entries inside the directory are returned as errors so the
    /// caller can skip them; failing to open the directory itself is fatal.
    pub fn image_paths(&self) -> Result<Vec<Result<PathBuf, Skipped>>, ExtractError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        paths.push(Ok(entry.into_path()));
                    }
                }
                Err(err) if err.depth() == 0 => return Err(ExtractError::Walk(err)),
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    paths.push(Err(Skipped {
                        path,
                        reason: FeatureError::Io(err.into()),
                    }));
                }
            }
        }
        Ok(paths)
    }

    /// Extract every image, writing records to `sink`.
    pub fn run(&self, sink: &mut dyn RecordSink) -> Result<ExtractReport, ExtractError> {
        self.run_with(sink, |_| {})
    }

    /// Like [`Extractor::run`], calling `on_outcome` after each file.
    pub fn run_with<F>(
        &self,
        sink: &mut dyn RecordSink,
        mut on_outcome: F,
    ) -> Result<ExtractReport, ExtractError>
    where
        F: FnMut(&Outcome),
    {
        info!("extracting features from {}", self.input_dir.display());
        let mut report = ExtractReport::default();

        for candidate in self.image_paths()? {
            let outcome = match candidate {
                Ok(path) => match extract_features(&path) {
                    Ok(features) => {
                        let id = record_id(&path);
                        sink.write_record(&id, &features)?;
                        report.written += 1;
                        debug!("extracted {} from {}", id, path.display());
                        Outcome::Extracted { path, id }
                    }
                    Err(reason) => Outcome::Skipped(Skipped { path, reason }),
                },
                Err(skipped) => Outcome::Skipped(skipped),
            };

            on_outcome(&outcome);
            if let Outcome::Skipped(skipped) = outcome {
                warn!(
                    "skipping {} ({}): {}",
                    skipped.path.display(),
                    skipped.reason.kind(),
                    skipped.reason
                );
                report.skipped.push(skipped);
            }
        }

        info!(
            "extracted {} records, skipped {} files",
            report.written,
            report.skipped.len()
        );
        Ok(report)
    }
}

/// Record identifier: the file name without its final extension.
pub fn record_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_record_id_strips_last_extension() {
        assert_eq!(record_id(Path::new("media/cat_01.png")), "cat_01");
        assert_eq!(record_id(Path::new("media/archive.tar.gz")), "archive.tar");
        assert_eq!(record_id(Path::new("media/README")), "README");
    }

    #[test]
    fn test_subdirectories_are_not_visited() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]))
            .save(nested.join("deep.png"))
            .unwrap();
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]))
            .save(dir.path().join("top.png"))
            .unwrap();

        let mut sink = MemorySink::new();
        let report = Extractor::new(dir.path()).run(&mut sink).unwrap();

        assert_eq!(report.written, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(sink.records[0].0, "top");
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let mut sink = MemorySink::new();
        let err = Extractor::new("/nonexistent/imgfeat/media")
            .run(&mut sink)
            .unwrap_err();
        assert!(matches!(err, ExtractError::Walk(_)));
    }

    #[test]
    fn test_outcomes_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(4, 4, Rgb([9, 9, 9]))
            .save(dir.path().join("ok.png"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let mut sink = MemorySink::new();
        let mut seen = Vec::new();
        let report = Extractor::new(dir.path())
            .run_with(&mut sink, |outcome| {
                seen.push(matches!(outcome, Outcome::Extracted { .. }))
            })
            .unwrap();

        assert_eq!(seen.len(), 2);
        assert_eq!(seen.iter().filter(|ok| **ok).count(), 1);
        assert_eq!(report.written, 1);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("notes.txt"));
    }
}
