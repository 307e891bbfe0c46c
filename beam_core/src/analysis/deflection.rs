//! # Deflection Integrator
//!
//! Deflections by the unit-load (virtual work) method: the real bending
//! moment field, weighted by the moment field of a unit load at the point of
//! interest, integrated over the span and scaled by the flexural rigidity.
//!
//! `δ[i] = (1/EI) · Σ_j M[j] · (−m[i][j]) · dx`
//!
//! The minus sign on the matrix entry reflects the −1 magnitude of the
//! synthetic unit loads; dropping it flips the deflection sign convention.
//! With downward (negative) loads the resulting deflections come out
//! negative, i.e. downward.

use nalgebra::DMatrix;

/// Integrate the deflection sequence from the real moment field and the
/// unit-load moment matrix
///
/// `dx = length / (N − 1)`; `ei` is the flexural rigidity E·I. The matrix
/// must be N×N for a moment field of N samples.
pub fn integrate_deflection(
    bending_moment: &[f64],
    unit_load_matrix: &DMatrix<f64>,
    length: f64,
    ei: f64,
) -> Vec<f64> {
    let n = bending_moment.len();
    debug_assert_eq!(unit_load_matrix.nrows(), n);
    debug_assert_eq!(unit_load_matrix.ncols(), n);
    if n < 2 {
        return vec![0.0; n];
    }
    let dx = length / (n as f64 - 1.0);

    (0..n)
        .map(|i| {
            let virtual_work: f64 = (0..n)
                .map(|j| bending_moment[j] * -unit_load_matrix[(i, j)] * dx)
                .sum();
            virtual_work / ei
        })
        .collect()
}
