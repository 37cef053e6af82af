//! Feature schema: value order, column names and header layouts.

use serde::{Deserialize, Serialize};

/// Name of the identifier column, always first.
pub const ID_COLUMN: &str = "id";

/// Number of scalar features extracted per image.
pub const FEATURE_COUNT: usize = 14;

/// One extracted feature, listed in the order values are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    HueMean,
    SaturationMean,
    ValueMean,
    HueStd,
    SaturationStd,
    ValueStd,
    Contrast,
    Dissimilarity,
    Homogeneity,
    Asm,
    Correlation,
    Entropy,
    IntensityMean,
    IntensityStd,
}

impl FeatureColumn {
    /// All features in value order.
    pub const ALL: [FeatureColumn; FEATURE_COUNT] = [
        FeatureColumn::HueMean,
        FeatureColumn::SaturationMean,
        FeatureColumn::ValueMean,
        FeatureColumn::HueStd,
        FeatureColumn::SaturationStd,
        FeatureColumn::ValueStd,
        FeatureColumn::Contrast,
        FeatureColumn::Dissimilarity,
        FeatureColumn::Homogeneity,
        FeatureColumn::Asm,
        FeatureColumn::Correlation,
        FeatureColumn::Entropy,
        FeatureColumn::IntensityMean,
        FeatureColumn::IntensityStd,
    ];

    /// Position of this feature inside a [`FeatureVector`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name that correctly describes the value.
    pub fn name(self) -> &'static str {
        match self {
            FeatureColumn::HueMean => "h_mean",
            FeatureColumn::SaturationMean => "s_mean",
            FeatureColumn::ValueMean => "v_mean",
            FeatureColumn::HueStd => "h_std",
            FeatureColumn::SaturationStd => "s_std",
            FeatureColumn::ValueStd => "v_std",
            FeatureColumn::Contrast => "contrast",
            FeatureColumn::Dissimilarity => "dissimilarity",
            FeatureColumn::Homogeneity => "homogeneity",
            FeatureColumn::Asm => "asm",
            FeatureColumn::Correlation => "correlation",
            FeatureColumn::Entropy => "entropy",
            FeatureColumn::IntensityMean => "intensity_mean",
            FeatureColumn::IntensityStd => "intensity_std",
        }
    }
}

/// How the dataset header labels the feature columns.
///
/// Historical datasets label the second and third value columns (and the
/// fifth and sixth) as `v_*` then `s_*`, although the stored values are
/// saturation then value. `Legacy` reproduces those header bytes so existing
/// consumers keep working; `Corrected` emits labels that match the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLayout {
    #[default]
    Legacy,
    Corrected,
}

impl HeaderLayout {
    /// Header label written for a feature at the given value position.
    pub fn label(self, column: FeatureColumn) -> &'static str {
        match (self, column) {
            (HeaderLayout::Legacy, FeatureColumn::SaturationMean) => "v_mean",
            (HeaderLayout::Legacy, FeatureColumn::ValueMean) => "s_mean",
            (HeaderLayout::Legacy, FeatureColumn::SaturationStd) => "v_std",
            (HeaderLayout::Legacy, FeatureColumn::ValueStd) => "s_std",
            (_, column) => column.name(),
        }
    }

    /// Feature column labels in value order.
    pub fn feature_labels(self) -> Vec<String> {
        FeatureColumn::ALL
            .iter()
            .map(|&c| self.label(c).to_string())
            .collect()
    }

    /// Full header, identifier first.
    pub fn header(self) -> Vec<String> {
        let mut header = vec![ID_COLUMN.to_string()];
        header.extend(self.feature_labels());
        header
    }
}

impl std::str::FromStr for HeaderLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(HeaderLayout::Legacy),
            "corrected" => Ok(HeaderLayout::Corrected),
            other => Err(format!(
                "unknown header layout '{}', expected 'legacy' or 'corrected'",
                other
            )),
        }
    }
}

/// The fixed-length feature vector of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn get(&self, column: FeatureColumn) -> f64 {
        self.0[column.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns true when every value is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
