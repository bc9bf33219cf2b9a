//! Optimal-setting selection.
//!
//! Picks, for each factor, the level with the highest mean S/N ratio. The
//! S/N transform has already folded the metric direction into "higher is
//! better", so the comparison is the same for all three metric types.

use std::collections::BTreeMap;

use crate::doe::types::{Factor, OptimalSetting};

/// Select the best observed level per factor, array-column order preserved.
///
/// Ties break to the first level in ascending level-value order: the map
/// iterates ascending and a later level must be strictly greater to
/// displace the incumbent. The winning level is always one observed in the
/// column; its label comes from [`Factor::label_for`], which synthesizes a
/// sentinel when the factor declares fewer labels than the matrix uses.
#[must_use]
pub fn optimal_settings(
    factors: &[Factor],
    sn_by_factor: &[BTreeMap<u32, f64>],
) -> Vec<OptimalSetting> {
    factors
        .iter()
        .zip(sn_by_factor.iter())
        .map(|(factor, sn_means)| {
            let mut best: Option<(u32, f64)> = None;
            for (&level, &sn) in sn_means {
                match best {
                    Some((_, incumbent)) if sn <= incumbent => {}
                    _ => best = Some((level, sn)),
                }
            }

            // sn_by_factor always carries at least one observed level per
            // column for a non-empty matrix.
            let (level, _) = best.unwrap_or((1, 0.0));

            OptimalSetting {
                factor: factor.name.clone(),
                level,
                label: factor.label_for(level),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(labels: &[&str]) -> Factor {
        Factor::new(
            "f-0",
            "Factor A",
            labels.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn test_picks_highest_sn() {
        let sn: BTreeMap<u32, f64> = [(1, -20.0), (2, -17.5), (3, -25.0)].into();
        let settings = optimal_settings(&[factor(&["low", "mid", "high"])], &[sn]);

        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].level, 2);
        assert_eq!(settings[0].label, "mid");
    }

    #[test]
    fn test_tie_breaks_to_lowest_level() {
        let sn: BTreeMap<u32, f64> = [(1, -20.0), (2, -20.0)].into();
        let settings = optimal_settings(&[factor(&["low", "high"])], &[sn]);

        assert_eq!(settings[0].level, 1);
        assert_eq!(settings[0].label, "low");
    }

    #[test]
    fn test_winner_is_observed_level() {
        // Column only ever held levels 2 and 3; 1 must not be selectable.
        let sn: BTreeMap<u32, f64> = [(2, -5.0), (3, -4.0)].into();
        let settings = optimal_settings(&[factor(&["a", "b", "c"])], &[sn]);

        assert_eq!(settings[0].level, 3);
        assert_eq!(settings[0].label, "c");
    }

    #[test]
    fn test_sentinel_label_when_undeclared() {
        let sn: BTreeMap<u32, f64> = [(1, -5.0), (2, -4.0)].into();
        // Only one declared label, winner is level 2.
        let settings = optimal_settings(&[factor(&["only"])], &[sn]);

        assert_eq!(settings[0].level, 2);
        assert_eq!(settings[0].label, "Level 2");
    }

    #[test]
    fn test_column_order_preserved() {
        let a: BTreeMap<u32, f64> = [(1, 1.0), (2, 2.0)].into();
        let b: BTreeMap<u32, f64> = [(1, 9.0), (2, 3.0)].into();
        let factors = vec![
            Factor::new("f-0", "Factor A", vec![]),
            Factor::new("f-1", "Factor B", vec![]),
        ];

        let settings = optimal_settings(&factors, &[a, b]);
        assert_eq!(settings[0].factor, "Factor A");
        assert_eq!(settings[0].level, 2);
        assert_eq!(settings[1].factor, "Factor B");
        assert_eq!(settings[1].level, 1);
    }
}
