//! Column confounding check for two-level arrays.
//!
//! In a two-level array, the interaction of two columns is itself a
//! two-level pattern: "same" where the columns agree, "different" where
//! they disagree. If that derived pattern coincides with a third column,
//! the third column's main effect is aliased with the interaction and the
//! two cannot be estimated separately.

use crate::error::{Error, Result};
use crate::oa::OrthogonalArray;

/// Derive the interaction signal of two factor columns.
///
/// Returns one value per run: `1` where the columns hold equal level
/// values, `2` where they differ. Comparing the result against the
/// remaining columns of a two-level array reveals confounding. This is a
/// structural query only — it performs no statistical inference and is not
/// part of the [`analyze`](crate::doe::analyze) pipeline.
///
/// # Errors
///
/// Returns [`Error::ColumnOutOfBounds`] if either column index is not a
/// valid factor column.
pub fn interaction_column(
    oa: &OrthogonalArray,
    first: usize,
    second: usize,
) -> Result<Vec<u32>> {
    let size = oa.factors();
    for index in [first, second] {
        if index >= size {
            return Err(Error::ColumnOutOfBounds { index, size });
        }
    }

    Ok((0..oa.runs())
        .map(|run| if oa.get(run, first) == oa.get(run, second) { 1 } else { 2 })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_interaction_signal() {
        let oa = l4();
        let signal = interaction_column(&oa, 0, 1).unwrap();
        assert_eq!(signal, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_l4_third_column_is_aliased() {
        // Textbook L4 confounding: column 3 carries the 1×2 interaction.
        let oa = l4();
        let signal = interaction_column(&oa, 0, 1).unwrap();
        let column: Vec<u32> = oa.column(2).iter().copied().collect();
        assert_eq!(signal, column);
    }

    #[test]
    fn test_symmetry() {
        let oa = l4();
        assert_eq!(
            interaction_column(&oa, 0, 2).unwrap(),
            interaction_column(&oa, 2, 0).unwrap()
        );
    }

    #[test]
    fn test_self_interaction_is_all_same() {
        let oa = l4();
        assert_eq!(interaction_column(&oa, 1, 1).unwrap(), vec![1; 4]);
    }

    #[test]
    fn test_out_of_bounds_column() {
        let oa = l4();
        assert_eq!(
            interaction_column(&oa, 0, 3),
            Err(Error::ColumnOutOfBounds { index: 3, size: 3 })
        );
    }
}
