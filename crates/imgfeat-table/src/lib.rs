//! imgfeat Dataset Tables
//!
//! This crate holds the types shared by every stage of the imgfeat pipeline:
//! the fixed feature schema, the in-memory dataset table, its CSV encoding and
//! the pipeline configuration.
//!
//! # Example
//!
//! ```
//! use imgfeat_table::{DatasetTable, FeatureVector, HeaderLayout};
//!
//! let mut table = DatasetTable::for_features(HeaderLayout::Legacy);
//! table.push("cat_01", FeatureVector::from([0.5; 14]).as_slice()).unwrap();
//!
//! let mut out = Vec::new();
//! imgfeat_table::csv_io::write_table(&table, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("id,h_mean,v_mean,s_mean"));
//! ```
//!
//! # Modules
//!
//! - [`columns`]: feature order, column names and header layouts
//! - [`table`]: the `DatasetTable` type
//! - [`csv_io`]: reading and writing tables as CSV
//! - [`config`]: `PipelineConfig` with the default constants of each stage
//! - [`error`]: `TableError`

pub mod columns;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod table;

pub use columns::{FeatureColumn, FeatureVector, HeaderLayout, FEATURE_COUNT, ID_COLUMN};
pub use config::{PipelineConfig, PlotConfig};
pub use csv_io::{read_table, read_table_file, write_table, write_table_file, DatasetWriter};
pub use error::{Result, TableError};
pub use table::DatasetTable;
