//! Orthogonal array data model.
//!
//! An orthogonal array describes a fixed experimental layout: each row is a
//! run, each column a control factor, and each cell a 1-based level index.
//! Arrays are passive data — selected from the [catalogue](crate::catalogue)
//! or supplied by the caller — and consumed read-only by the analysis engine.
//!
//! ## Level conventions
//!
//! Cells are 1-based level indices, matching the standard Taguchi tables
//! (L4, L9, ...). A uniform array declares a common level count; a
//! mixed-level array declares `0` and each column's level set is derived
//! from the distinct values actually present in that column.

use ndarray::Array2;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A Taguchi orthogonal array.
///
/// Wraps the run×factor matrix together with its catalogue identity. The
/// matrix is stored as [`Array2<u32>`] with 1-based level indices.
///
/// # Example
///
/// ```
/// use taguchi_doe::catalogue::get_by_name;
///
/// let l9 = get_by_name("L9").unwrap();
/// assert_eq!(l9.runs(), 9);
/// assert_eq!(l9.factors(), 4);
/// assert_eq!(l9.declared_levels(), 3);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrthogonalArray {
    /// Catalogue identifier, e.g. `"L9"`.
    id: String,
    /// Display name, e.g. `"L9 (3⁴)"`.
    name: String,
    /// Declared levels per factor; `0` marks a mixed-level array.
    levels: u32,
    /// Human-readable description of the layout.
    description: String,
    /// The array data, shape (runs, factors), 1-based level indices.
    matrix: Array2<u32>,
}

impl OrthogonalArray {
    /// Create a new orthogonal array, validating well-formedness.
    ///
    /// The check is intentionally shallow: every cell must be a positive
    /// level index, and for a uniform array no cell may exceed the declared
    /// level count. Orthogonality itself (pairwise balance) is the matrix
    /// author's contract and is not verified here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArray`] if the matrix is empty, a cell is 0,
    /// or a cell exceeds the declared level count of a uniform array.
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        levels: u32,
        description: impl Into<String>,
        matrix: Array2<u32>,
    ) -> Result<Self> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(Error::invalid_array("matrix must have at least one run and one factor"));
        }

        for ((row, col), &value) in matrix.indexed_iter() {
            if value == 0 {
                return Err(Error::invalid_array(format!(
                    "cell ({row}, {col}) is 0; level indices are 1-based"
                )));
            }
            if levels > 0 && value > levels {
                return Err(Error::invalid_array(format!(
                    "cell ({row}, {col}) is {value}, above the declared {levels} levels"
                )));
            }
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            levels,
            description: description.into(),
            matrix,
        })
    }

    /// Get the catalogue identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the number of runs (rows).
    #[must_use]
    pub fn runs(&self) -> usize {
        self.matrix.nrows()
    }

    /// Get the number of factors (columns).
    #[must_use]
    pub fn factors(&self) -> usize {
        self.matrix.ncols()
    }

    /// Get the declared level count; `0` for a mixed-level array.
    #[must_use]
    pub fn declared_levels(&self) -> u32 {
        self.levels
    }

    /// Check whether this is a mixed-level array.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.levels == 0
    }

    /// Get a reference to the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Array2<u32> {
        &self.matrix
    }

    /// Get the level index at a specific run and factor.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, run: usize, factor: usize) -> u32 {
        self.matrix[[run, factor]]
    }

    /// Get a factor column as a view.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, factor: usize) -> ndarray::ArrayView1<'_, u32> {
        self.matrix.column(factor)
    }

    /// Group run indices by the level value observed in a factor column.
    ///
    /// The returned map iterates levels in ascending order and assigns every
    /// run index to exactly one level. It is the single grouping step
    /// consumed by main effects, ANOVA, and optimal-level selection, so the
    /// three never disagree about which runs belong to which level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfBounds`] if `factor` is not a valid
    /// column index.
    pub fn level_groups(&self, factor: usize) -> Result<BTreeMap<u32, Vec<usize>>> {
        if factor >= self.factors() {
            return Err(Error::ColumnOutOfBounds {
                index: factor,
                size: self.factors(),
            });
        }

        let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (run, &level) in self.matrix.column(factor).iter().enumerate() {
            groups.entry(level).or_default().push(run);
        }
        Ok(groups)
    }

    /// Get the distinct level values observed in a factor column, ascending.
    ///
    /// For a mixed-level array this is how a column's own level count is
    /// derived; the declared count plays no role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfBounds`] if `factor` is not a valid
    /// column index.
    pub fn observed_levels(&self, factor: usize) -> Result<Vec<u32>> {
        Ok(self.level_groups(factor)?.into_keys().collect())
    }

    /// Get the number of distinct levels observed in a factor column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnOutOfBounds`] if `factor` is not a valid
    /// column index.
    pub fn levels_for(&self, factor: usize) -> Result<usize> {
        Ok(self.level_groups(factor)?.len())
    }
}

impl fmt::Debug for OrthogonalArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} runs × {} factors) with data {:?}",
            self.id,
            self.runs(),
            self.factors(),
            self.matrix
        )
    }
}

impl fmt::Display for OrthogonalArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} — {}", self.name, self.description)?;
        for row in self.matrix.rows() {
            let row_str: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "  {}", row_str.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn l4_matrix() -> Array2<u32> {
        array![[1, 1, 1], [1, 2, 2], [2, 1, 2], [2, 2, 1]]
    }

    #[test]
    fn test_try_new_valid() {
        let oa =
            OrthogonalArray::try_new("L4", "L4 (2³)", 2, "basic 2-level array", l4_matrix())
                .unwrap();
        assert_eq!(oa.runs(), 4);
        assert_eq!(oa.factors(), 3);
        assert_eq!(oa.declared_levels(), 2);
        assert!(!oa.is_mixed());
        assert_eq!(oa.get(2, 1), 1);
    }

    #[test]
    fn test_try_new_rejects_zero_cell() {
        let matrix = array![[1, 1], [0, 2]];
        let result = OrthogonalArray::try_new("bad", "bad", 2, "", matrix);
        assert!(matches!(result, Err(Error::InvalidArray { .. })));
    }

    #[test]
    fn test_try_new_rejects_out_of_range_cell() {
        let matrix = array![[1, 1], [3, 2]];
        let result = OrthogonalArray::try_new("bad", "bad", 2, "", matrix);
        assert!(matches!(result, Err(Error::InvalidArray { .. })));
    }

    #[test]
    fn test_try_new_mixed_allows_varying_levels() {
        // Declared 0 = mixed: one 2-level and one 3-level column.
        let matrix = array![[1, 1], [1, 2], [1, 3], [2, 1], [2, 2], [2, 3]];
        let oa = OrthogonalArray::try_new("mix", "mix", 0, "", matrix).unwrap();
        assert!(oa.is_mixed());
        assert_eq!(oa.levels_for(0).unwrap(), 2);
        assert_eq!(oa.levels_for(1).unwrap(), 3);
    }

    #[test]
    fn test_level_groups_partition_runs() {
        let oa = OrthogonalArray::try_new("L4", "L4", 2, "", l4_matrix()).unwrap();

        for factor in 0..oa.factors() {
            let groups = oa.level_groups(factor).unwrap();
            let mut seen: Vec<usize> = groups.values().flatten().copied().collect();
            seen.sort_unstable();
            // Every run appears exactly once across the level groups.
            assert_eq!(seen, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_level_groups_ordered_ascending() {
        let matrix = array![[3, 1], [1, 1], [2, 1], [3, 1], [1, 1], [2, 1]];
        let oa = OrthogonalArray::try_new("m", "m", 3, "", matrix).unwrap();
        let levels: Vec<u32> = oa.level_groups(0).unwrap().into_keys().collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn test_level_groups_out_of_bounds() {
        let oa = OrthogonalArray::try_new("L4", "L4", 2, "", l4_matrix()).unwrap();
        assert_eq!(
            oa.level_groups(3),
            Err(Error::ColumnOutOfBounds { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_observed_levels() {
        let oa = OrthogonalArray::try_new("L4", "L4", 2, "", l4_matrix()).unwrap();
        assert_eq!(oa.observed_levels(0).unwrap(), vec![1, 2]);
    }
}
