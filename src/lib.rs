//! # Taguchi DOE
//!
//! Design-of-Experiments analysis over Taguchi orthogonal arrays.
//!
//! ## Overview
//!
//! A Taguchi experiment runs a reduced set of factor-level combinations —
//! the rows of an orthogonal array — and measures one response per run.
//! This library turns that data into:
//! - **S/N ratios**: a log-scale transform that makes every quality
//!   direction (smaller/larger/nominal) read as "higher is better"
//! - **Main effects**: mean response and mean S/N per factor level
//! - **Approximate ANOVA**: each factor's percent contribution to the
//!   total S/N variation
//! - **Optimal settings**: the predicted best level per factor
//!
//! It also ships a catalogue of standard arrays (L4 through L27), a
//! confounding check for two-level designs, and a serializable report
//! context for downstream report generation.
//!
//! ## Quick Start
//!
//! ```rust
//! use taguchi_doe::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Pick a standard array and describe the experiment.
//! let l4 = get_by_name("L4")?;
//! let factors = vec![
//!     Factor::new("f-0", "Temperature", vec!["150C".into(), "180C".into()]),
//!     Factor::new("f-1", "Pressure", vec!["low".into(), "high".into()]),
//!     Factor::new("f-2", "Time", vec!["30s".into(), "60s".into()]),
//! ];
//! let mut data = ExperimentData::new("L4", MetricType::SmallerIsBetter, factors, l4.runs());
//! data.responses = vec![12.1, 9.8, 10.4, 8.7];
//!
//! // One call, one immutable result.
//! let result = analyze(&data, &l4)?;
//! assert_eq!(result.optimal_settings.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! The engine is pure and synchronous: no I/O, no shared state, no
//! configuration. It does not perform a rigorous F-test (there is no
//! pooled error term with one response per run) and does not generate or
//! verify orthogonal arrays — catalogue matrices are trusted data, and
//! caller-supplied matrices are only checked for well-formedness.
//!
//! ## Features
//!
//! - `serde`: serialization/deserialization of models and results
//! - `python`: Python bindings via PyO3

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalogue;
pub mod doe;
pub mod error;
pub mod oa;
#[cfg(feature = "python")]
pub mod python;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalogue::{get_by_name, list_standard_arrays};
    pub use crate::doe::{
        analyze, interaction_column, signal_to_noise, AnalysisResult, AnovaEntry,
        ExperimentData, Factor, MetricType, OptimalSetting,
    };
    pub use crate::error::{Error, Result};
    pub use crate::oa::OrthogonalArray;
    pub use crate::report::ReportContext;
}

// Re-export commonly used items at crate root
pub use catalogue::get_by_name as get_standard_oa;
pub use doe::{analyze, AnalysisResult, ExperimentData, Factor, MetricType};
pub use error::{Error, Result};
pub use oa::OrthogonalArray;
