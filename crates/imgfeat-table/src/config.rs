//! Pipeline configuration.
//!
//! Every field defaults to the constant the pipeline has always used, so an
//! empty JSON object (or no config file at all) reproduces the default run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::columns::HeaderLayout;
use crate::error::{Result, TableError};

/// Default fraction of total variance kept by the reducer.
pub const DEFAULT_VARIANCE_RETAINED: f64 = 0.80;

/// Settings for every pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory scanned for images.
    pub media_dir: PathBuf,
    /// Feature table written by the extractor.
    pub dataset_path: PathBuf,
    /// Standardized table written by the normalizer.
    pub normalized_path: PathBuf,
    /// Fraction of variance the reducer must retain, in (0, 1].
    pub variance_retained: f64,
    /// Reduced table; `pca_{variance_retained}.csv` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_path: Option<PathBuf>,
    /// Header labelling for the feature table.
    pub header_layout: HeaderLayout,
    pub plot: PlotConfig,
}

/// Settings for the benchmark plotter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// KD-Tree experiment results.
    pub kd_path: PathBuf,
    /// VP-Tree experiment results.
    pub vp_path: PathBuf,
    /// Directory receiving the chart PNGs.
    pub out_dir: PathBuf,
    /// Neighbour count the charts are sliced at.
    pub k: u32,
    /// Output resolution in dots per inch.
    pub dpi: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("media"),
            dataset_path: PathBuf::from("dataset.csv"),
            normalized_path: PathBuf::from("normalized_dataset.csv"),
            variance_retained: DEFAULT_VARIANCE_RETAINED,
            reduced_path: None,
            header_layout: HeaderLayout::Legacy,
            plot: PlotConfig::default(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            kd_path: PathBuf::from("resultados_experimentos_kdtree.csv"),
            vp_path: PathBuf::from("resultados_experimentos_vptree.csv"),
            out_dir: PathBuf::from("plot"),
            k: 1,
            dpi: 300,
        }
    }
}

impl PipelineConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PipelineConfig =
            serde_json::from_str(json).map_err(|e| TableError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.variance_retained > 0.0 && self.variance_retained <= 1.0) {
            return Err(TableError::Config(format!(
                "variance_retained must be in (0, 1], got {}",
                self.variance_retained
            )));
        }
        if self.plot.dpi == 0 {
            return Err(TableError::Config("plot.dpi must be positive".to_string()));
        }
        Ok(())
    }

    /// Path of the reduced table.
    pub fn reduced_path(&self) -> PathBuf {
        self.reduced_path
            .clone()
            .unwrap_or_else(|| reduced_file_name(self.variance_retained))
    }
}

/// File name that embeds the retained-variance fraction, e.g. `pca_0.8.csv`.
pub fn reduced_file_name(variance_retained: f64) -> PathBuf {
    PathBuf::from(format!("pca_{}.csv", variance_retained))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PipelineConfig::from_json("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.reduced_path(), PathBuf::from("pca_0.8.csv"));
        assert_eq!(config.plot.k, 1);
        assert_eq!(config.plot.dpi, 300);
    }

    #[test]
    fn test_partial_override() {
        let config = PipelineConfig::from_json(
            r#"{"media_dir": "photos", "variance_retained": 0.95, "plot": {"dpi": 100}}"#,
        )
        .unwrap();
        assert_eq!(config.media_dir, PathBuf::from("photos"));
        assert_eq!(config.reduced_path(), PathBuf::from("pca_0.95.csv"));
        assert_eq!(config.plot.dpi, 100);
        assert_eq!(config.plot.out_dir, PathBuf::from("plot"));
    }

    #[test]
    fn test_header_layout_parses() {
        let config = PipelineConfig::from_json(r#"{"header_layout": "corrected"}"#).unwrap();
        assert_eq!(config.header_layout, HeaderLayout::Corrected);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            PipelineConfig::from_json(r#"{"variance": 0.9}"#),
            Err(TableError::Config(_))
        ));
    }

    #[test]
    fn test_out_of_range_variance_rejected() {
        assert!(PipelineConfig::from_json(r#"{"variance_retained": 0.0}"#).is_err());
        assert!(PipelineConfig::from_json(r#"{"variance_retained": 1.5}"#).is_err());
        assert!(PipelineConfig::from_json(r#"{"variance_retained": 1.0}"#).is_ok());
    }
}
