//! DOE (Design of Experiments) analysis engine.
//!
//! This module turns a completed Taguchi experiment — an orthogonal array,
//! factor definitions, and one measured response per run — into a full
//! analysis:
//! - per-run signal-to-noise ratios
//! - per-factor main effects (mean response and mean S/N per level)
//! - an approximate ANOVA contribution breakdown
//! - the predicted optimal factor-level combination
//!
//! The engine is a pure, single-shot computation: no I/O, no shared state,
//! no configuration. Concurrent calls with different inputs are safe.
//!
//! ## Quick Start
//!
//! ```rust
//! use taguchi_doe::catalogue::get_by_name;
//! use taguchi_doe::doe::{analyze, ExperimentData, Factor, MetricType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let l4 = get_by_name("L4")?;
//!
//! let factors = vec![
//!     Factor::new("f-0", "Temperature", vec!["150C".into(), "180C".into()]),
//!     Factor::new("f-1", "Pressure", vec!["low".into(), "high".into()]),
//!     Factor::new("f-2", "Time", vec!["30s".into(), "60s".into()]),
//! ];
//!
//! let mut data = ExperimentData::new("L4", MetricType::SmallerIsBetter, factors, l4.runs());
//! data.responses = vec![12.1, 9.8, 10.4, 8.7];
//!
//! let result = analyze(&data, &l4)?;
//!
//! for setting in &result.optimal_settings {
//!     println!("{}: {}", setting.factor, setting.label);
//! }
//! # Ok(())
//! # }
//! ```

mod aliasing;
mod anova;
mod main_effects;
mod optimal;
mod sn_ratios;
mod types;

pub use aliasing::interaction_column;
pub use sn_ratios::{run_sn_ratios, signal_to_noise, sn_grand_mean};
pub use types::{
    AnalysisResult, AnovaEntry, ExperimentData, Factor, MetricType, OptimalSetting,
};

use crate::error::{Error, Result};
use crate::oa::OrthogonalArray;

/// Run the complete Taguchi analysis for one experiment.
///
/// Validates the structural invariants once at this boundary, then runs the
/// four computation steps (S/N transform, main effects, ANOVA, optimal
/// settings). The result is constructed atomically: the call either returns
/// a complete [`AnalysisResult`] with finite fields throughout, or a typed
/// error and nothing else.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] — `responses` is not one-per-run or `factors`
///   is not one-per-column.
/// - [`Error::DegenerateResponse`] — a response is zero or non-finite; every
///   metric's S/N transform takes `log10(y²)`, which such values break.
/// - [`Error::UnbalancedDesign`] — a column's observed level count does not
///   divide the run count, so the ANOVA replication `runs / k` is undefined.
///
/// # Example
///
/// ```rust
/// use taguchi_doe::catalogue::get_by_name;
/// use taguchi_doe::doe::{analyze, ExperimentData, Factor, MetricType};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let l9 = get_by_name("L9")?;
/// let factors: Vec<Factor> = (0..l9.factors())
///     .map(|i| Factor::new(format!("f-{i}"), format!("F{i}"), vec![]))
///     .collect();
///
/// let mut data = ExperimentData::new("L9", MetricType::LargerIsBetter, factors, l9.runs());
/// data.responses = vec![85.0, 92.0, 78.0, 91.0, 88.0, 82.0, 89.0, 86.0, 94.0];
///
/// let result = analyze(&data, &l9)?;
/// assert_eq!(result.anova.len(), 4);
/// # Ok(())
/// # }
/// ```
pub fn analyze(data: &ExperimentData, oa: &OrthogonalArray) -> Result<AnalysisResult> {
    validate(data, oa)?;

    // Step 1: signal-to-noise transform, one scalar per run.
    let sn_ratios = run_sn_ratios(data.metric, &data.responses);

    // Step 2: main effects from the shared level grouping.
    let (means_by_factor, sn_by_factor) =
        main_effects::level_means(oa, &data.responses, &sn_ratios)?;

    // Step 3: approximate variance decomposition over S/N.
    let grand_mean = sn_grand_mean(&sn_ratios);
    let anova = anova::anova_table(&data.factors, &sn_by_factor, &sn_ratios, grand_mean);

    // Step 4: best level per factor, by mean S/N.
    let optimal_settings = optimal::optimal_settings(&data.factors, &sn_by_factor);

    Ok(AnalysisResult {
        sn_ratios,
        means_by_factor,
        sn_by_factor,
        anova,
        optimal_settings,
    })
}

/// One structural validation pass over the whole input.
///
/// The factor-order-matches-column-order correlation is enforced here,
/// once, instead of being assumed separately by every computation step.
fn validate(data: &ExperimentData, oa: &OrthogonalArray) -> Result<()> {
    if data.responses.len() != oa.runs() {
        return Err(Error::shape_mismatch(
            format!("{} responses (one per run)", oa.runs()),
            format!("{} responses", data.responses.len()),
        ));
    }

    if data.factors.len() != oa.factors() {
        return Err(Error::shape_mismatch(
            format!("{} factors (one per column)", oa.factors()),
            format!("{} factors", data.factors.len()),
        ));
    }

    for (run, &y) in data.responses.iter().enumerate() {
        if y == 0.0 || !y.is_finite() {
            return Err(Error::DegenerateResponse { run, value: y });
        }
    }

    for factor in 0..oa.factors() {
        let k = oa.levels_for(factor)?;
        if oa.runs() % k != 0 {
            return Err(Error::UnbalancedDesign {
                factor,
                levels: k,
                runs: oa.runs(),
            });
        }
    }

    Ok(())
}
