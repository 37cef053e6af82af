//! imgfeat Feature Extractor
//!
//! Turns an image into a fixed vector of 14 hand-crafted features and runs
//! that extraction over a directory, streaming records into a [`RecordSink`].
//!
//! # Features
//!
//! - **Color**: circular mean/spread of hue, mean/std of saturation and value
//! - **Texture**: contrast, dissimilarity, homogeneity, ASM and correlation of
//!   a 16-level horizontal gray-level co-occurrence matrix
//! - **Entropy**: Shannon entropy (bits) of the 256-bin gray histogram
//! - **Intensity**: mean/std of BT.601 luminance
//!
//! # Example
//!
//! ```no_run
//! use imgfeat_extract::{CsvRecordSink, Extractor};
//! use imgfeat_table::HeaderLayout;
//! use std::path::Path;
//!
//! let mut sink = CsvRecordSink::create(Path::new("dataset.csv"), HeaderLayout::Legacy).unwrap();
//! let report = Extractor::new("media").run(&mut sink).unwrap();
//! sink.finish().unwrap();
//! println!("{} rows, {} skipped", report.written, report.skipped.len());
//! ```

pub mod batch;
pub mod circular;
pub mod color;
pub mod error;
pub mod features;
pub mod glcm;
pub mod histogram;
pub mod loader;
pub mod moments;
pub mod sink;

pub use batch::{ExtractReport, Extractor, Outcome, Skipped};
pub use circular::{hue_statistics, CircularStats};
pub use error::{ExtractError, FeatureError};
pub use features::{extract_features, features_from_pixels, features_from_rgb};
pub use glcm::{Glcm, GlcmProperties};
pub use sink::{CsvRecordSink, MemorySink, RecordSink};
