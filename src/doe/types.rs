//! DOE analysis types.
//!
//! Core types describing a Taguchi experiment and its analysis result.

use std::collections::BTreeMap;

/// Quality direction for the S/N transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricType {
    /// Minimize the response value.
    /// S/N = -10 · log₁₀(y²)
    SmallerIsBetter,
    /// Maximize the response value.
    /// S/N = -10 · log₁₀(1/y²)
    LargerIsBetter,
    /// Hit a target value.
    /// S/N = 10 · log₁₀(y²), the single-observation simplification — with
    /// one response per run there is no replicate variance to divide by.
    NominalIsBest,
}

impl Default for MetricType {
    fn default() -> Self {
        Self::SmallerIsBetter
    }
}

impl MetricType {
    /// Human-readable name, as shown in reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallerIsBetter => "Smaller is Better",
            Self::LargerIsBetter => "Larger is Better",
            Self::NominalIsBest => "Nominal is Best",
        }
    }
}

/// A control factor with named levels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factor {
    /// Caller-assigned identifier.
    pub id: String,
    /// Display name, e.g. `"Temperature"`.
    pub name: String,
    /// Ordered level labels; index 0 labels level value 1.
    pub levels: Vec<String>,
}

impl Factor {
    /// Create a factor from its display name and level labels.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        levels: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            levels,
        }
    }

    /// Resolve the label for a 1-based level value.
    ///
    /// Total over all positive level values: an index past the declared
    /// labels yields the synthesized sentinel `"Level N"` instead of
    /// failing, so a factor with fewer labels than the matrix column uses
    /// never aborts an analysis.
    #[must_use]
    pub fn label_for(&self, level: u32) -> String {
        self.levels
            .get(level as usize - 1)
            .cloned()
            .unwrap_or_else(|| format!("Level {level}"))
    }
}

/// A complete experiment: array choice, metric, factors, and responses.
///
/// `factors` is index-aligned with the matrix columns and `responses` with
/// the matrix rows (one response per run). Both alignments are verified by
/// [`analyze`](crate::doe::analyze) before any computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentData {
    /// Identifier of the orthogonal array the runs follow.
    pub oa_id: String,
    /// Quality direction for the S/N transform.
    pub metric: MetricType,
    /// Control factors, one per matrix column.
    pub factors: Vec<Factor>,
    /// Measured responses, one per matrix row.
    pub responses: Vec<f64>,
    /// Free-text experiment objective; opaque to the engine.
    pub objective: String,
}

impl ExperimentData {
    /// Create experiment data with responses zero-filled until entered.
    #[must_use]
    pub fn new(
        oa_id: impl Into<String>,
        metric: MetricType,
        factors: Vec<Factor>,
        runs: usize,
    ) -> Self {
        Self {
            oa_id: oa_id.into(),
            metric,
            factors,
            responses: vec![0.0; runs],
            objective: String::new(),
        }
    }
}

/// One row of the approximate ANOVA table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnovaEntry {
    /// Factor display name (the variation source).
    pub source: String,
    /// Degrees of freedom: observed levels − 1.
    pub degrees_of_freedom: usize,
    /// Sum of squares attributed to this factor.
    pub sum_of_squares: f64,
    /// Mean square (SS / df).
    pub mean_square: f64,
    /// Always `None`: the design has no pooled error term, so no valid
    /// F statistic can be formed. Kept as an `Option` so serialized output
    /// cannot be mistaken for a computed ratio.
    pub f_ratio: Option<f64>,
    /// Percent of total S/N variation attributed to this factor;
    /// defined as 0 when the total sum of squares is 0.
    pub contribution_percent: f64,
}

/// The recommended setting for one factor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalSetting {
    /// Factor display name.
    pub factor: String,
    /// Winning 1-based level value, always one observed in the column.
    pub level: u32,
    /// Label for the winning level, synthesized if undeclared.
    pub label: String,
}

/// Complete analysis result, constructed atomically by one
/// [`analyze`](crate::doe::analyze) call and never mutated after.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// S/N ratio per run, index-aligned with the matrix rows.
    pub sn_ratios: Vec<f64>,
    /// Per factor index: observed level value → mean response.
    pub means_by_factor: Vec<BTreeMap<u32, f64>>,
    /// Per factor index: observed level value → mean S/N ratio.
    pub sn_by_factor: Vec<BTreeMap<u32, f64>>,
    /// ANOVA rows, one per factor, array-column order preserved.
    pub anova: Vec<AnovaEntry>,
    /// Recommended settings, one per factor, array-column order preserved.
    pub optimal_settings: Vec<OptimalSetting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_labels() {
        assert_eq!(MetricType::SmallerIsBetter.label(), "Smaller is Better");
        assert_eq!(MetricType::LargerIsBetter.label(), "Larger is Better");
        assert_eq!(MetricType::NominalIsBest.label(), "Nominal is Best");
    }

    #[test]
    fn test_label_for_declared() {
        let factor = Factor::new(
            "f-0",
            "Temperature",
            vec!["150C".to_string(), "180C".to_string()],
        );
        assert_eq!(factor.label_for(1), "150C");
        assert_eq!(factor.label_for(2), "180C");
    }

    #[test]
    fn test_label_for_sentinel() {
        let factor = Factor::new("f-0", "Temperature", vec!["150C".to_string()]);
        assert_eq!(factor.label_for(2), "Level 2");
        assert_eq!(factor.label_for(7), "Level 7");
    }

    #[test]
    fn test_experiment_data_zero_filled() {
        let data = ExperimentData::new("L4", MetricType::SmallerIsBetter, vec![], 4);
        assert_eq!(data.responses, vec![0.0; 4]);
        assert!(data.objective.is_empty());
    }
}
