//! Python bindings for taguchi-doe.
//!
//! This module exposes the catalogue and the analysis engine to Python
//! using PyO3. Enable the `python` feature to use this.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::BTreeMap;

use crate::catalogue;
use crate::doe::{analyze, ExperimentData, Factor, MetricType};
use crate::oa::OrthogonalArray;

/// Python wrapper for an orthogonal array.
#[pyclass(name = "OrthogonalArray")]
pub struct PyOrthogonalArray {
    inner: OrthogonalArray,
}

#[pymethods]
impl PyOrthogonalArray {
    /// Get the catalogue identifier.
    #[getter]
    fn id(&self) -> String {
        self.inner.id().to_string()
    }

    /// Get the display name.
    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Get the number of runs.
    #[getter]
    fn runs(&self) -> usize {
        self.inner.runs()
    }

    /// Get the number of factors.
    #[getter]
    fn factors(&self) -> usize {
        self.inner.factors()
    }

    /// Get the declared level count (0 = mixed).
    #[getter]
    fn levels(&self) -> u32 {
        self.inner.declared_levels()
    }

    /// Get the matrix as a list of lists of 1-based level indices.
    fn matrix(&self) -> Vec<Vec<u32>> {
        self.inner
            .matrix()
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "OrthogonalArray(id='{}', runs={}, factors={})",
            self.inner.id(),
            self.inner.runs(),
            self.inner.factors()
        )
    }
}

/// One ANOVA row.
#[pyclass(name = "AnovaEntry")]
#[derive(Clone)]
pub struct PyAnovaEntry {
    /// Factor display name.
    #[pyo3(get)]
    pub source: String,
    /// Degrees of freedom.
    #[pyo3(get)]
    pub degrees_of_freedom: usize,
    /// Sum of squares.
    #[pyo3(get)]
    pub sum_of_squares: f64,
    /// Mean square.
    #[pyo3(get)]
    pub mean_square: f64,
    /// Percent contribution to total S/N variation.
    #[pyo3(get)]
    pub contribution_percent: f64,
}

/// One recommended factor setting.
#[pyclass(name = "OptimalSetting")]
#[derive(Clone)]
pub struct PyOptimalSetting {
    /// Factor display name.
    #[pyo3(get)]
    pub factor: String,
    /// Winning 1-based level value.
    #[pyo3(get)]
    pub level: u32,
    /// Label for the winning level.
    #[pyo3(get)]
    pub label: String,
}

/// Python wrapper for a complete analysis result.
#[pyclass(name = "AnalysisResult")]
pub struct PyAnalysisResult {
    sn_ratios: Vec<f64>,
    means_by_factor: Vec<BTreeMap<u32, f64>>,
    sn_by_factor: Vec<BTreeMap<u32, f64>>,
    anova: Vec<PyAnovaEntry>,
    optimal_settings: Vec<PyOptimalSetting>,
}

#[pymethods]
impl PyAnalysisResult {
    /// S/N ratio per run.
    #[getter]
    fn sn_ratios(&self) -> Vec<f64> {
        self.sn_ratios.clone()
    }

    /// Per factor: dict of level value to mean response.
    #[getter]
    fn means_by_factor(&self) -> Vec<BTreeMap<u32, f64>> {
        self.means_by_factor.clone()
    }

    /// Per factor: dict of level value to mean S/N ratio.
    #[getter]
    fn sn_by_factor(&self) -> Vec<BTreeMap<u32, f64>> {
        self.sn_by_factor.clone()
    }

    /// ANOVA rows in array-column order.
    #[getter]
    fn anova(&self) -> Vec<PyAnovaEntry> {
        self.anova.clone()
    }

    /// Recommended settings in array-column order.
    #[getter]
    fn optimal_settings(&self) -> Vec<PyOptimalSetting> {
        self.optimal_settings.clone()
    }
}

fn parse_metric(metric: &str) -> PyResult<MetricType> {
    match metric.to_lowercase().as_str() {
        "smaller" | "smaller_is_better" => Ok(MetricType::SmallerIsBetter),
        "larger" | "larger_is_better" => Ok(MetricType::LargerIsBetter),
        "nominal" | "nominal_is_best" => Ok(MetricType::NominalIsBest),
        _ => Err(PyValueError::new_err(format!(
            "unknown metric '{metric}': use 'smaller', 'larger', or 'nominal'"
        ))),
    }
}

/// Retrieve a standard array by name (e.g. "L9").
#[pyfunction]
#[pyo3(name = "get_by_name")]
fn py_get_by_name(name: &str) -> PyResult<PyOrthogonalArray> {
    catalogue::get_by_name(name)
        .map(|inner| PyOrthogonalArray { inner })
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// List the names of all standard arrays.
#[pyfunction]
#[pyo3(name = "list_standard_arrays")]
fn py_list_standard_arrays() -> Vec<&'static str> {
    catalogue::list_standard_arrays()
}

/// Run the Taguchi analysis.
///
/// `factors` is a list of `(name, [level labels])` tuples, one per array
/// column; `responses` one measurement per run.
#[pyfunction]
#[pyo3(name = "analyze", signature = (oa, metric, factors, responses, objective = None))]
fn py_analyze(
    oa: &PyOrthogonalArray,
    metric: &str,
    factors: Vec<(String, Vec<String>)>,
    responses: Vec<f64>,
    objective: Option<String>,
) -> PyResult<PyAnalysisResult> {
    let factors: Vec<Factor> = factors
        .into_iter()
        .enumerate()
        .map(|(i, (name, levels))| Factor::new(format!("f-{i}"), name, levels))
        .collect();

    let data = ExperimentData {
        oa_id: oa.inner.id().to_string(),
        metric: parse_metric(metric)?,
        factors,
        responses,
        objective: objective.unwrap_or_default(),
    };

    let result = analyze(&data, &oa.inner).map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyAnalysisResult {
        sn_ratios: result.sn_ratios,
        means_by_factor: result.means_by_factor,
        sn_by_factor: result.sn_by_factor,
        anova: result
            .anova
            .into_iter()
            .map(|e| PyAnovaEntry {
                source: e.source,
                degrees_of_freedom: e.degrees_of_freedom,
                sum_of_squares: e.sum_of_squares,
                mean_square: e.mean_square,
                contribution_percent: e.contribution_percent,
            })
            .collect(),
        optimal_settings: result
            .optimal_settings
            .into_iter()
            .map(|s| PyOptimalSetting {
                factor: s.factor,
                level: s.level,
                label: s.label,
            })
            .collect(),
    })
}

/// The Python module definition.
#[pymodule]
fn taguchi_doe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOrthogonalArray>()?;
    m.add_class::<PyAnalysisResult>()?;
    m.add_class::<PyAnovaEntry>()?;
    m.add_class::<PyOptimalSetting>()?;
    m.add_function(wrap_pyfunction!(py_get_by_name, m)?)?;
    m.add_function(wrap_pyfunction!(py_list_standard_arrays, m)?)?;
    m.add_function(wrap_pyfunction!(py_analyze, m)?)?;
    Ok(())
}
