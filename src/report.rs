//! Report context for the external report generator.
//!
//! The broader system hands a finished analysis to a generative-text
//! collaborator that writes technical and executive reports. This module's
//! job is only the boundary: collect everything those reports interpolate —
//! objective, metric, array identity, factor names, optimal settings, and
//! contribution percentages — into one serializable value. Prompt wording,
//! model choice, transport, and retry policy are the collaborator's
//! concern.

use crate::doe::{AnalysisResult, ExperimentData};

/// The contribution of one variation source, ready for interpolation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceContribution {
    /// Factor display name.
    pub source: String,
    /// Percent of total S/N variation.
    pub contribution_percent: f64,
}

/// A recommended factor setting, ready for interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedSetting {
    /// Factor display name.
    pub factor: String,
    /// Level label at the recommended setting.
    pub level: String,
}

/// Everything a report prompt needs from one analysis, in one value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportContext {
    /// Free-text experiment objective.
    pub objective: String,
    /// Metric name, e.g. `"Smaller is Better"`.
    pub metric: String,
    /// Identifier of the orthogonal array used.
    pub oa_id: String,
    /// Factor display names, array-column order.
    pub factor_names: Vec<String>,
    /// Recommended setting per factor, array-column order.
    pub optimal_settings: Vec<RecommendedSetting>,
    /// ANOVA contribution per factor, array-column order.
    pub contributions: Vec<SourceContribution>,
}

impl ReportContext {
    /// Assemble the report context from an experiment and its analysis.
    #[must_use]
    pub fn new(data: &ExperimentData, result: &AnalysisResult) -> Self {
        Self {
            objective: data.objective.clone(),
            metric: data.metric.label().to_string(),
            oa_id: data.oa_id.clone(),
            factor_names: data.factors.iter().map(|f| f.name.clone()).collect(),
            optimal_settings: result
                .optimal_settings
                .iter()
                .map(|s| RecommendedSetting {
                    factor: s.factor.clone(),
                    level: s.label.clone(),
                })
                .collect(),
            contributions: result
                .anova
                .iter()
                .map(|e| SourceContribution {
                    source: e.source.clone(),
                    contribution_percent: e.contribution_percent,
                })
                .collect(),
        }
    }
}
