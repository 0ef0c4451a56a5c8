//! `gauss-lsolver`: dense linear system solver based on Gaussian elimination
//! with partial pivoting.
//!
//! The solver is a pure, synchronous computation: three phases (pivot
//! selection, forward elimination, back substitution) applied to a working
//! copy of `[A | b]`. Every failure is classified as a [`GaussCoreError`].

// Core modules
pub mod algorithms;
pub mod verify;

// Re-export from gauss_core
pub use gauss_core::{DenseMatrix, GaussCoreError, Matrix, Phase, Vector};

use algorithms::GaussianElimination;

/// Solves `a x = b` with the default pivot tolerance.
///
/// Takes ownership of both buffers and reduces them in place; callers that
/// need the original system afterwards must clone it first, or use
/// [`algorithms::SolveAlgorithm::solve`], which copies.
pub fn solve(mut a: DenseMatrix, mut b: Vec<f64>) -> Result<Vec<f64>, GaussCoreError> {
    GaussianElimination::default()
        .solve_in_place(&mut a, &mut b)
        .map(|result| result.x)
}
