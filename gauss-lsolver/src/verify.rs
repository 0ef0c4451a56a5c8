//! Checks a candidate solution against the original system.
//!
//! The solver never calls these itself; they exist for callers that want to
//! report how well each equation is satisfied.

use gauss_core::{ops, DenseMatrix, GaussCoreError, Matrix};

fn check_dims(a: &DenseMatrix, x: &[f64], b: &[f64]) -> Result<(), GaussCoreError> {
    if a.cols() != x.len() || a.rows() != b.len() {
        return Err(GaussCoreError::InvalidDimensions(format!(
            "Cannot verify a {}x{} system with x of length {} and b of length {}",
            a.rows(),
            a.cols(),
            x.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Per-equation residual `(A x)_k - b_k`.
pub fn residuals(a: &DenseMatrix, x: &[f64], b: &[f64]) -> Result<Vec<f64>, GaussCoreError> {
    check_dims(a, x, b)?;
    Ok(a.iter_rows()
        .zip(b)
        .map(|(row, bk)| ops::dot(row, x) - bk)
        .collect())
}

/// Largest absolute residual over all equations.
pub fn max_abs_residual(a: &DenseMatrix, x: &[f64], b: &[f64]) -> Result<f64, GaussCoreError> {
    Ok(residuals(a, x, b)?
        .into_iter()
        .fold(0.0, |acc, r| acc.max(r.abs())))
}

/// True when every equation holds to within `rel_tol` relative to the size of
/// its terms: `|r_k| <= rel_tol * max(1, |b_k|, sum_j |a_kj x_j|)`.
pub fn is_solution(
    a: &DenseMatrix,
    x: &[f64],
    b: &[f64],
    rel_tol: f64,
) -> Result<bool, GaussCoreError> {
    check_dims(a, x, b)?;
    Ok(a.iter_rows().zip(b).all(|(row, &bk)| {
        let lhs = ops::dot(row, x);
        let magnitude: f64 = row.iter().zip(x).map(|(aj, xj)| (aj * xj).abs()).sum();
        let scale = 1.0f64.max(bk.abs()).max(magnitude);
        (lhs - bk).abs() <= rel_tol * scale
    }))
}
