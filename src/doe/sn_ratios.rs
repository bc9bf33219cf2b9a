//! Signal-to-noise transform.
//!
//! The S/N ratio re-expresses every quality direction as "higher is
//! better" on a log scale, so the downstream main-effects comparison and
//! optimal-level selection are uniform across metric types.

use super::types::MetricType;

/// S/N ratio of a single response value, in dB.
///
/// - Smaller-is-better: η = -10 · log₁₀(y²)
/// - Larger-is-better:  η = -10 · log₁₀(1/y²)
/// - Nominal-is-best:   η = 10 · log₁₀(y²)
///
/// Pure function of `(metric, y)` — same input, same output, no state.
/// Callers must have screened out zero and non-finite responses (see
/// [`analyze`](crate::doe::analyze)): all three branches take the log of
/// `y²`, which is undefined at zero.
#[must_use]
pub fn signal_to_noise(metric: MetricType, y: f64) -> f64 {
    match metric {
        MetricType::SmallerIsBetter => -10.0 * (y * y).log10(),
        MetricType::LargerIsBetter => -10.0 * (1.0 / (y * y)).log10(),
        MetricType::NominalIsBest => 10.0 * (y * y).log10(),
    }
}

/// S/N ratios for every run, in row order.
#[must_use]
pub fn run_sn_ratios(metric: MetricType, responses: &[f64]) -> Vec<f64> {
    responses
        .iter()
        .map(|&y| signal_to_noise(metric, y))
        .collect()
}

/// Arithmetic mean of the per-run S/N ratios.
///
/// Returns 0 for an empty slice; `analyze` rejects empty inputs before
/// this point.
#[must_use]
pub fn sn_grand_mean(sn_ratios: &[f64]) -> f64 {
    if sn_ratios.is_empty() {
        return 0.0;
    }
    sn_ratios.iter().sum::<f64>() / sn_ratios.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smaller_is_better() {
        // y = 10: η = -10 · log₁₀(100) = -20
        let sn = signal_to_noise(MetricType::SmallerIsBetter, 10.0);
        assert!((sn - (-20.0)).abs() < 1e-10);

        // Smaller responses score higher.
        let small = signal_to_noise(MetricType::SmallerIsBetter, 2.0);
        let large = signal_to_noise(MetricType::SmallerIsBetter, 8.0);
        assert!(small > large);
    }

    #[test]
    fn test_larger_is_better() {
        // y = 10: η = -10 · log₁₀(1/100) = 20
        let sn = signal_to_noise(MetricType::LargerIsBetter, 10.0);
        assert!((sn - 20.0).abs() < 1e-10);

        // Larger responses score higher.
        let small = signal_to_noise(MetricType::LargerIsBetter, 2.0);
        let large = signal_to_noise(MetricType::LargerIsBetter, 8.0);
        assert!(large > small);
    }

    #[test]
    fn test_nominal_is_best() {
        // y = 10: η = 10 · log₁₀(100) = 20
        let sn = signal_to_noise(MetricType::NominalIsBest, 10.0);
        assert!((sn - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_smaller_and_larger_are_negations() {
        for &y in &[0.5, 1.0, 3.0, 42.0] {
            let s = signal_to_noise(MetricType::SmallerIsBetter, y);
            let l = signal_to_noise(MetricType::LargerIsBetter, y);
            assert!((s + l).abs() < 1e-10);
        }
    }

    #[test]
    fn test_negative_response_uses_magnitude() {
        // y² discards the sign.
        let pos = signal_to_noise(MetricType::SmallerIsBetter, 5.0);
        let neg = signal_to_noise(MetricType::SmallerIsBetter, -5.0);
        assert!((pos - neg).abs() < 1e-10);
    }

    #[test]
    fn test_determinism() {
        let a = signal_to_noise(MetricType::LargerIsBetter, 7.25);
        let b = signal_to_noise(MetricType::LargerIsBetter, 7.25);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_run_sn_ratios_row_order() {
        let sn = run_sn_ratios(MetricType::SmallerIsBetter, &[10.0, 100.0]);
        assert_eq!(sn.len(), 2);
        assert!((sn[0] - (-20.0)).abs() < 1e-10);
        assert!((sn[1] - (-40.0)).abs() < 1e-10);
    }

    #[test]
    fn test_sn_grand_mean() {
        let sn = run_sn_ratios(MetricType::SmallerIsBetter, &[10.0, 100.0]);
        assert!((sn_grand_mean(&sn) - (-30.0)).abs() < 1e-10);
        assert_eq!(sn_grand_mean(&[]), 0.0);
    }
}
