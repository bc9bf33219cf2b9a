//! Main-effects aggregation.
//!
//! For each factor, the main effect at a level is the mean of the response
//! (and of the S/N ratio) over the runs where that factor sat at that
//! level, marginalized over all other factors. Levels are the distinct
//! values actually observed in the column, so mixed-level arrays — where
//! some columns carry fewer levels than others — fall out for free.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::oa::OrthogonalArray;

/// Mean response and mean S/N per (factor, observed level value).
///
/// Returns two parallel vectors, one entry per factor column, each mapping
/// observed level value to the arithmetic mean over that level's run group.
/// Both maps are computed from the same [`level_groups`] pass, so they
/// always agree on the run partition.
///
/// [`level_groups`]: OrthogonalArray::level_groups
///
/// # Errors
///
/// Propagates [`Error::ColumnOutOfBounds`](crate::error::Error) from the
/// grouping step; unreachable once `analyze` has validated shapes.
#[allow(clippy::type_complexity)]
pub fn level_means(
    oa: &OrthogonalArray,
    responses: &[f64],
    sn_ratios: &[f64],
) -> Result<(Vec<BTreeMap<u32, f64>>, Vec<BTreeMap<u32, f64>>)> {
    let mut means_by_factor = Vec::with_capacity(oa.factors());
    let mut sn_by_factor = Vec::with_capacity(oa.factors());

    for factor in 0..oa.factors() {
        let groups = oa.level_groups(factor)?;

        let mut means = BTreeMap::new();
        let mut sn_means = BTreeMap::new();

        for (level, runs) in groups {
            let n = runs.len() as f64;
            let mean = runs.iter().map(|&i| responses[i]).sum::<f64>() / n;
            let sn_mean = runs.iter().map(|&i| sn_ratios[i]).sum::<f64>() / n;
            means.insert(level, mean);
            sn_means.insert(level, sn_mean);
        }

        means_by_factor.push(means);
        sn_by_factor.push(sn_means);
    }

    Ok((means_by_factor, sn_by_factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doe::sn_ratios::run_sn_ratios;
    use crate::doe::types::MetricType;
    use ndarray::array;

    fn l4() -> OrthogonalArray {
        OrthogonalArray::try_new(
            "L4",
            "L4 (2³)",
            2,
            "",
            array![[1, 1, 1], [1, 2, 2], [2, 1, 2], [2, 2, 1]],
        )
        .unwrap()
    }

    #[test]
    fn test_level_means_l4() {
        let oa = l4();
        let responses = [10.0, 20.0, 15.0, 25.0];
        let sn = run_sn_ratios(MetricType::LargerIsBetter, &responses);

        let (means, _) = level_means(&oa, &responses, &sn).unwrap();

        // Factor 0: level 1 = (10+20)/2, level 2 = (15+25)/2
        assert!((means[0][&1] - 15.0).abs() < 1e-10);
        assert!((means[0][&2] - 20.0).abs() < 1e-10);

        // Factor 1: level 1 = (10+15)/2, level 2 = (20+25)/2
        assert!((means[1][&1] - 12.5).abs() < 1e-10);
        assert!((means[1][&2] - 22.5).abs() < 1e-10);
    }

    #[test]
    fn test_one_entry_per_observed_level() {
        let oa = l4();
        let responses = [10.0, 20.0, 15.0, 25.0];
        let sn = run_sn_ratios(MetricType::SmallerIsBetter, &responses);

        let (means, sn_means) = level_means(&oa, &responses, &sn).unwrap();

        for factor in 0..oa.factors() {
            let observed = oa.observed_levels(factor).unwrap();
            let mean_keys: Vec<u32> = means[factor].keys().copied().collect();
            let sn_keys: Vec<u32> = sn_means[factor].keys().copied().collect();
            assert_eq!(mean_keys, observed);
            assert_eq!(sn_keys, observed);
        }
    }

    #[test]
    fn test_mixed_level_columns() {
        // Column 0 has 2 observed levels, column 1 has 3.
        let oa = OrthogonalArray::try_new(
            "mix",
            "mix",
            0,
            "",
            array![[1, 1], [1, 2], [1, 3], [2, 1], [2, 2], [2, 3]],
        )
        .unwrap();
        let responses = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let sn = run_sn_ratios(MetricType::LargerIsBetter, &responses);

        let (means, _) = level_means(&oa, &responses, &sn).unwrap();

        assert_eq!(means[0].len(), 2);
        assert_eq!(means[1].len(), 3);
        assert!((means[0][&1] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((means[0][&2] - 5.0).abs() < 1e-10); // (4+5+6)/3
        assert!((means[1][&3] - 4.5).abs() < 1e-10); // (3+6)/2
    }
}
