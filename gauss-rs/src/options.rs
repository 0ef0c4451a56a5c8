use gauss_lsolver::algorithms::{GaussianElimination, DEFAULT_PIVOT_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Largest system the interactive form accepted.
pub const DEFAULT_MAX_EQUATIONS: usize = 10;

/// Caller-side settings for one evaluation. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Pivot magnitude below which the system is reported as singular.
    pub tolerance: f64,
    /// Usage limit on the number of equations; `None` disables it.
    pub max_equations: Option<usize>,
    /// Decimal places used when rendering the report.
    pub precision: usize,
    /// Recompute each equation with the solution and report the residual.
    pub verify: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_PIVOT_TOLERANCE,
            max_equations: Some(DEFAULT_MAX_EQUATIONS),
            precision: 6,
            verify: true,
        }
    }
}

impl SolveOptions {
    pub fn algorithm(&self) -> GaussianElimination {
        GaussianElimination::with_params(self.tolerance)
    }
}
