//! Resolve the effective configuration from a config file and CLI flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use imgfeat_table::config::reduced_file_name;
use imgfeat_table::PipelineConfig;
use log::debug;

/// Load `path` when given, otherwise start from the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            debug!("loaded config from {}: {:?}", path.display(), config);
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Reduced-table path: explicit flag, then config, then `pca_{variance}.csv`.
///
/// An explicit variance flag also renames the default file, so
/// `--variance 0.9` writes `pca_0.9.csv` unless a path is given.
pub fn reduced_output(
    config: &PipelineConfig,
    output: Option<PathBuf>,
    variance: Option<f64>,
) -> PathBuf {
    if let Some(path) = output {
        return path;
    }
    match (variance, &config.reduced_path) {
        (Some(v), _) => reduced_file_name(v),
        (None, Some(path)) => path.clone(),
        (None, None) => reduced_file_name(config.variance_retained),
    }
}
