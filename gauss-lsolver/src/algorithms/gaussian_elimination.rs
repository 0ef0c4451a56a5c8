use gauss_core::{ops, DenseMatrix, GaussCoreError, Matrix, Phase, Vector};
use log::{debug, trace, warn};

use super::{validate_system, GaussianElimination, SolveAlgorithm, SolveResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianEliminationMetadata {
    /// Number of row interchanges performed by pivoting.
    pub row_swaps: usize,
    /// Smallest post-swap pivot magnitude seen, a rough conditioning hint.
    pub min_abs_pivot: f64,
}

/// Decision taken by pivot selection for one elimination step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PivotOutcome {
    pub(crate) pivot_row: usize,
    pub(crate) swapped: bool,
    /// Diagonal value after the (possible) swap.
    pub(crate) value: f64,
}

// The trait form never touches the caller's data.
impl<M: Matrix> SolveAlgorithm<M> for GaussianElimination {
    type Value = f64;
    type Metadata = GaussianEliminationMetadata;

    fn solve(
        &self,
        a: &M,
        b: &[f64],
    ) -> Result<SolveResult<f64, GaussianEliminationMetadata>, GaussCoreError> {
        self.validate_inputs(a, b)?;
        let mut work_a = a.to_dense();
        let mut work_b = b.to_vec();
        self.solve_in_place(&mut work_a, &mut work_b)
    }
}

impl GaussianElimination {
    /// Solves `a x = b` directly in the caller's buffers.
    ///
    /// On return (success or failure) `a` and `b` hold the partially reduced
    /// system and carry no meaning for the caller.
    pub fn solve_in_place(
        &self,
        a: &mut DenseMatrix,
        b: &mut [f64],
    ) -> Result<SolveResult<f64, GaussianEliminationMetadata>, GaussCoreError> {
        validate_system(a.dims(), b.len())?;
        self.validate_tolerance()?;
        ensure_system_finite(a, b)?;

        let n = b.len();
        debug!("Gaussian elimination on a {n}x{n} system (tolerance {:e})", self.tolerance);

        let mut metadata = GaussianEliminationMetadata {
            row_swaps: 0,
            min_abs_pivot: f64::INFINITY,
        };

        for step in 0..n {
            let pivot = select_pivot(a, b, step);
            if pivot.swapped {
                metadata.row_swaps += 1;
            }

            // Checked on the post-swap diagonal so that pivoting had its chance first.
            // An exact zero is singular whatever the tolerance.
            if pivot.value == 0.0 || pivot.value.abs() < self.tolerance {
                warn!(
                    "Singular matrix: pivot {:e} at step {} is below tolerance {:e}",
                    pivot.value, step, self.tolerance
                );
                return Err(GaussCoreError::SingularMatrix {
                    step,
                    pivot: pivot.value,
                });
            }
            metadata.min_abs_pivot = metadata.min_abs_pivot.min(pivot.value.abs());

            eliminate(a, b, step)?;
            debug!(
                "Step {}: pivot row {} (value {:e}){}",
                step,
                pivot.pivot_row,
                pivot.value,
                if pivot.swapped { ", swapped" } else { "" }
            );
        }

        let x = back_substitute(a, b)?;
        debug!(
            "Solved {n}x{n} system with {} row swaps, min |pivot| {:e}",
            metadata.row_swaps, metadata.min_abs_pivot
        );
        Ok(SolveResult { x, metadata })
    }

    fn validate_tolerance(&self) -> Result<(), GaussCoreError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(GaussCoreError::InvalidParameter(format!(
                "Pivot tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Phase 1: picks the row in `step..n` with the largest `|a[r][step]|`
/// (lowest index on ties) and swaps it into position `step` in both `a` and `b`.
pub(crate) fn select_pivot(a: &mut DenseMatrix, b: &mut [f64], step: usize) -> PivotOutcome {
    let n = a.rows();
    let offset = ops::argmax_abs((step..n).map(|r| a.row(r)[step]))
        .map_or(0, |(offset, _)| offset);
    let pivot_row = step + offset;
    let swapped = pivot_row != step;
    if swapped {
        trace!("Swapping rows {} and {}", step, pivot_row);
        a.swap_rows(step, pivot_row);
        b.swap(step, pivot_row);
    }
    PivotOutcome {
        pivot_row,
        swapped,
        value: a.row(step)[step],
    }
}

/// Phase 2: normalizes row `step` so its diagonal is 1, then clears column
/// `step` in every row below it.
pub(crate) fn eliminate(a: &mut DenseMatrix, b: &mut [f64], step: usize) -> Result<(), GaussCoreError> {
    let n = a.rows();
    let diag = a.row(step)[step];
    ops::divide(&mut a.row_mut(step)[step..], diag);
    b[step] /= diag;
    ensure_finite(a.row(step), b[step], step, step)?;

    for j in (step + 1)..n {
        let (pivot_row, target) = a.row_pair_mut(step, j);
        let factor = target[step];
        if factor == 0.0 {
            continue;
        }
        // Columns left of `step` are already zero in both rows.
        ops::sub_scaled(factor, &pivot_row[step..], &mut target[step..]);
        b[j] -= factor * b[step];
        ensure_finite(a.row(j), b[j], step, j)?;
    }
    Ok(())
}

/// Phase 3: recovers x from the unit upper-triangular system left by [`eliminate`].
pub(crate) fn back_substitute(a: &DenseMatrix, b: &[f64]) -> Result<Vec<f64>, GaussCoreError> {
    let n = b.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = a.row(i);
        let xi = b[i] - ops::dot(&row[i + 1..], &x[i + 1..]);
        if !xi.is_finite() {
            warn!("Non-finite solution component x[{i}] during back substitution");
            return Err(GaussCoreError::NonFinite {
                phase: Phase::BackSubstitution,
                step: i,
                row: i,
            });
        }
        x[i] = xi;
    }
    Ok(x)
}

/// Rejects NaN or infinite entries in `[a | b]` before any arithmetic, so
/// that pivot selection never has to rank them.
fn ensure_system_finite(a: &DenseMatrix, b: &[f64]) -> Result<(), GaussCoreError> {
    match (0..b.len()).find(|&i| !a.row(i).is_finite() || !b[i].is_finite()) {
        Some(row) => {
            warn!("Non-finite value in input row {row}");
            Err(GaussCoreError::NonFinite {
                phase: Phase::Elimination,
                step: 0,
                row,
            })
        }
        None => Ok(()),
    }
}

fn ensure_finite(row: &[f64], rhs: f64, step: usize, row_index: usize) -> Result<(), GaussCoreError> {
    if row.is_finite() && rhs.is_finite() {
        return Ok(());
    }
    warn!("Non-finite value in row {row_index} at elimination step {step}");
    Err(GaussCoreError::NonFinite {
        phase: Phase::Elimination,
        step,
        row: row_index,
    })
}
