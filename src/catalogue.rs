//! Catalogue of standard Taguchi orthogonal arrays.
//!
//! This module provides the named arrays a practitioner reaches for —
//! L4, L8, L9, L12, L16, L18, L27 — keyed by their common identifiers.
//! The small matrices are embedded literally; L16 and L27 are generated
//! from their defining linear structure (Sylvester-Hadamard parity columns
//! and GF(3) linear forms, respectively).
//!
//! Cells are 1-based level indices throughout, matching the printed
//! Taguchi tables.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::oa::OrthogonalArray;

/// Retrieve an orthogonal array by its standard Taguchi name.
///
/// Supported arrays:
/// - **L4**: 4 runs, 3 factors at 2 levels
/// - **L8**: 8 runs, 7 factors at 2 levels
/// - **L9**: 9 runs, 4 factors at 3 levels
/// - **L12**: 12 runs, 11 factors at 2 levels (Plackett-Burman)
/// - **L16**: 16 runs, 15 factors at 2 levels
/// - **L18**: 18 runs, 8 factors, mixed 2¹·3⁷
/// - **L27**: 27 runs, 13 factors at 3 levels
///
/// Lookup is case-insensitive.
///
/// # Errors
///
/// Returns [`Error::InvalidArray`] for an unknown name.
///
/// # Example
///
/// ```
/// use taguchi_doe::catalogue::get_by_name;
///
/// let oa = get_by_name("L9").unwrap();
/// assert_eq!(oa.runs(), 9);
/// assert_eq!(oa.declared_levels(), 3);
/// ```
pub fn get_by_name(name: &str) -> Result<OrthogonalArray> {
    match name.to_uppercase().as_str() {
        "L4" => l4(),
        "L8" => l8(),
        "L9" => l9(),
        "L12" => l12(),
        "L16" => l16(),
        "L18" => l18(),
        "L27" => l27(),
        _ => Err(Error::invalid_array(format!(
            "unknown standard array: {name}"
        ))),
    }
}

/// List all available standard array names.
#[must_use]
pub fn list_standard_arrays() -> Vec<&'static str> {
    vec!["L4", "L8", "L9", "L12", "L16", "L18", "L27"]
}

fn matrix(rows: &[&[u32]]) -> Result<Array2<u32>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |r| r.len());
    let flat: Vec<u32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| Error::invalid_array(format!("ragged catalogue matrix: {e}")))
}

fn l4() -> Result<OrthogonalArray> {
    OrthogonalArray::try_new(
        "L4",
        "L4 (2³)",
        2,
        "Basic 2-level array for up to 3 factors.",
        matrix(&[&[1, 1, 1], &[1, 2, 2], &[2, 1, 2], &[2, 2, 1]])?,
    )
}

fn l8() -> Result<OrthogonalArray> {
    OrthogonalArray::try_new(
        "L8",
        "L8 (2⁷)",
        2,
        "Standard 2-level array for up to 7 factors.",
        matrix(&[
            &[1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 2, 2, 2, 2],
            &[1, 2, 2, 1, 1, 2, 2],
            &[1, 2, 2, 2, 2, 1, 1],
            &[2, 1, 2, 1, 2, 1, 2],
            &[2, 1, 2, 2, 1, 2, 1],
            &[2, 2, 1, 1, 2, 2, 1],
            &[2, 2, 1, 2, 1, 1, 2],
        ])?,
    )
}

fn l9() -> Result<OrthogonalArray> {
    OrthogonalArray::try_new(
        "L9",
        "L9 (3⁴)",
        3,
        "Standard 3-level array for up to 4 factors.",
        matrix(&[
            &[1, 1, 1, 1],
            &[1, 2, 2, 2],
            &[1, 3, 3, 3],
            &[2, 1, 2, 3],
            &[2, 2, 3, 1],
            &[2, 3, 1, 2],
            &[3, 1, 3, 2],
            &[3, 2, 1, 3],
            &[3, 3, 2, 1],
        ])?,
    )
}

fn l12() -> Result<OrthogonalArray> {
    OrthogonalArray::try_new(
        "L12",
        "L12 (2¹¹)",
        2,
        "Plackett-Burman 2-level array (saturated).",
        matrix(&[
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2],
            &[1, 1, 2, 2, 2, 1, 1, 1, 2, 2, 2],
            &[1, 2, 1, 2, 2, 1, 2, 2, 1, 1, 2],
            &[1, 2, 2, 1, 2, 2, 1, 2, 1, 2, 1],
            &[1, 2, 2, 2, 1, 2, 2, 1, 2, 1, 1],
            &[2, 1, 2, 2, 1, 1, 2, 2, 1, 2, 1],
            &[2, 1, 2, 1, 2, 2, 2, 1, 1, 1, 2],
            &[2, 1, 1, 2, 2, 2, 1, 2, 2, 1, 1],
            &[2, 2, 2, 1, 1, 1, 1, 2, 2, 1, 2],
            &[2, 2, 1, 2, 1, 2, 1, 1, 1, 2, 2],
            &[2, 2, 1, 1, 2, 1, 2, 1, 2, 2, 1],
        ])?,
    )
}

/// L16 from the Sylvester-Hadamard structure: column `c` (1..=15) holds
/// `1 + parity(run & c)`, giving all 15 balanced two-level columns over
/// 4 basis bits.
fn l16() -> Result<OrthogonalArray> {
    let mut flat = Vec::with_capacity(16 * 15);
    for run in 0..16u32 {
        for mask in 1..=15u32 {
            flat.push(1 + ((run & mask).count_ones() % 2));
        }
    }
    let data = Array2::from_shape_vec((16, 15), flat)
        .map_err(|e| Error::invalid_array(format!("L16 generation: {e}")))?;

    OrthogonalArray::try_new(
        "L16",
        "L16 (2¹⁵)",
        2,
        "Hadamard 2-level array for screening.",
        data,
    )
}

fn l18() -> Result<OrthogonalArray> {
    OrthogonalArray::try_new(
        "L18",
        "L18 (2¹ 3⁷)",
        0,
        "Mixed-level array: 1 factor at 2 levels, 7 factors at 3 levels.",
        matrix(&[
            &[1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 2, 2, 2, 2, 2, 2],
            &[1, 1, 3, 3, 3, 3, 3, 3],
            &[1, 2, 1, 1, 2, 2, 3, 3],
            &[1, 2, 2, 2, 3, 3, 1, 1],
            &[1, 2, 3, 3, 1, 1, 2, 2],
            &[1, 3, 1, 2, 1, 3, 2, 3],
            &[1, 3, 2, 3, 2, 1, 3, 1],
            &[1, 3, 3, 1, 3, 2, 1, 2],
            &[2, 1, 1, 3, 3, 2, 2, 1],
            &[2, 1, 2, 1, 1, 3, 3, 2],
            &[2, 1, 3, 2, 2, 1, 1, 3],
            &[2, 2, 1, 2, 3, 1, 3, 2],
            &[2, 2, 2, 3, 1, 2, 1, 3],
            &[2, 2, 3, 1, 2, 3, 2, 1],
            &[2, 3, 1, 3, 2, 3, 1, 2],
            &[2, 3, 2, 1, 3, 1, 2, 3],
            &[2, 3, 3, 2, 1, 2, 3, 1],
        ])?,
    )
}

/// L27 from GF(3) linear forms: runs are the 27 triples of base-3 digits,
/// and each column is a nonzero linear form normalized so its first
/// nonzero coefficient is 1. The 13 such forms give the 13 standard
/// pairwise-balanced columns.
fn l27() -> Result<OrthogonalArray> {
    let mut forms: Vec<[u32; 3]> = Vec::with_capacity(13);
    for c2 in 0..3u32 {
        for c1 in 0..3u32 {
            for c0 in 0..3u32 {
                let coeffs = [c2, c1, c0];
                let leading = coeffs.iter().find(|&&c| c != 0);
                if leading == Some(&1) {
                    forms.push(coeffs);
                }
            }
        }
    }

    let mut flat = Vec::with_capacity(27 * 13);
    for run in 0..27u32 {
        let digits = [run / 9 % 3, run / 3 % 3, run % 3];
        for coeffs in &forms {
            let value: u32 = coeffs
                .iter()
                .zip(digits.iter())
                .map(|(c, d)| c * d)
                .sum::<u32>()
                % 3;
            flat.push(1 + value);
        }
    }
    let data = Array2::from_shape_vec((27, 13), flat)
        .map_err(|e| Error::invalid_array(format!("L27 generation: {e}")))?;

    OrthogonalArray::try_new(
        "L27",
        "L27 (3¹³)",
        3,
        "Large 3-level array for up to 13 factors.",
        data,
    )
}
