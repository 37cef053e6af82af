//! imgfeat End-to-End Test Infrastructure
//!
//! Integration tests that drive whole pipeline stages on scratch
//! directories:
//!
//! - **Pipeline**: images -> dataset -> normalized -> reduced tables
//! - **Plot**: benchmark CSVs -> chart PNGs and the text summary
//! - **Determinism**: identical inputs give byte-identical outputs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p imgfeat-tests
//! ```

pub mod fixtures;
pub mod harness;

pub use harness::{hash_file, hash_tree, PipelineHarness};
