//! Approximate ANOVA over S/N ratios.
//!
//! Decomposes the total S/N variation into per-factor contributions using
//! level means. This is the screening-grade decomposition: with one
//! response per run there is no pooled error term, so no F-ratio or
//! p-value can be formed and the table reports contribution percentages
//! only.

use std::collections::BTreeMap;

use crate::doe::types::{AnovaEntry, Factor};

/// Build the ANOVA table, one row per factor in array-column order.
///
/// For a factor with `k` observed levels the per-level replication is
/// `runs / k` — a balanced array is a precondition, checked for
/// divisibility at the `analyze` boundary and not re-verified here.
///
/// `SS_factor = Σ_l replication · (mean_sn(l) - grand_mean)²`, df = k − 1,
/// MS = SS / df. Contributions are `100 · SS / total_ss`, or exactly 0 for
/// every factor when `total_ss` is 0 (all S/N ratios identical).
#[must_use]
pub fn anova_table(
    factors: &[Factor],
    sn_by_factor: &[BTreeMap<u32, f64>],
    sn_ratios: &[f64],
    grand_mean: f64,
) -> Vec<AnovaEntry> {
    let runs = sn_ratios.len();

    let total_ss: f64 = sn_ratios.iter().map(|sn| (sn - grand_mean).powi(2)).sum();

    factors
        .iter()
        .zip(sn_by_factor.iter())
        .map(|(factor, sn_means)| {
            let k = sn_means.len();
            let replication = runs as f64 / k as f64;

            let ss: f64 = sn_means
                .values()
                .map(|mean| replication * (mean - grand_mean).powi(2))
                .sum();

            let df = k - 1;
            let ms = if df > 0 { ss / df as f64 } else { 0.0 };

            let contribution_percent = if total_ss > 0.0 {
                100.0 * ss / total_ss
            } else {
                0.0
            };

            AnovaEntry {
                source: factor.name.clone(),
                degrees_of_freedom: df,
                sum_of_squares: ss,
                mean_square: ms,
                f_ratio: None,
                contribution_percent,
            }
        })
        .collect()
}
