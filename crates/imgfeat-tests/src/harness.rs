//! Scratch-directory harness for pipeline runs.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use imgfeat_table::{PipelineConfig, PlotConfig};
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::fixtures::{KD_RESULTS_CSV, VP_RESULTS_CSV};

/// A temp directory laid out like a pipeline working directory.
pub struct PipelineHarness {
    /// Working directory for inputs and outputs.
    pub work_dir: TempDir,
}

impl Default for PipelineHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineHarness {
    /// Create a harness with an empty `media/` directory.
    pub fn new() -> Self {
        let work_dir = TempDir::new().expect("Failed to create work dir");
        fs::create_dir_all(work_dir.path().join("media")).expect("Failed to create media dir");
        Self { work_dir }
    }

    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    pub fn media_dir(&self) -> PathBuf {
        self.path().join("media")
    }

    /// Save `img` as PNG under `media/`.
    pub fn add_image(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.media_dir().join(name);
        img.save(&path).expect("Failed to write image fixture");
        path
    }

    /// Write raw bytes under `media/`.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.media_dir().join(name);
        fs::write(&path, bytes).expect("Failed to write raw fixture");
        path
    }

    /// Write the benchmark result tables and return a plot config using them.
    pub fn add_benchmarks(&self, dpi: u32) -> PlotConfig {
        let kd_path = self.path().join("resultados_experimentos_kdtree.csv");
        let vp_path = self.path().join("resultados_experimentos_vptree.csv");
        fs::write(&kd_path, KD_RESULTS_CSV).expect("Failed to write KD results");
        fs::write(&vp_path, VP_RESULTS_CSV).expect("Failed to write VP results");
        PlotConfig {
            kd_path,
            vp_path,
            out_dir: self.path().join("plot"),
            k: 1,
            dpi,
        }
    }

    /// Default config with every path rooted in the work directory.
    pub fn config(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            media_dir: self.media_dir(),
            dataset_path: self.path().join(&defaults.dataset_path),
            normalized_path: self.path().join(&defaults.normalized_path),
            reduced_path: Some(self.path().join(defaults.reduced_path())),
            ..defaults
        }
    }
}

/// BLAKE3 of a file's contents.
pub fn hash_file(path: &Path) -> String {
    let bytes = fs::read(path).expect("Failed to read file for hashing");
    blake3::hash(&bytes).to_hex().to_string()
}

/// `(relative path, hash)` for every file under `root`, sorted by path.
pub fn hash_tree(root: &Path) -> Vec<(PathBuf, String)> {
    let mut entries: Vec<(PathBuf, String)> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap_or(e.path()).to_path_buf();
            (rel, hash_file(e.path()))
        })
        .collect();
    entries.sort();
    entries
}
