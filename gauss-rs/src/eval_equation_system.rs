use gauss_core::DenseMatrix;
use gauss_lsolver::{algorithms::SolveAlgorithm, verify};
use log::{debug, info};

use crate::{
    error::{GaussError, ParseError, Result},
    model::EquationSystem,
    options::SolveOptions,
    report::{EquationCheck, SolutionReport},
};

/// A validated square system, ready to be handed to the solver.
#[derive(Clone, Debug)]
pub struct EvalEquationSystem {
    pub a_matrix: DenseMatrix,
    pub b_vector: Vec<f64>,
}

impl TryFrom<EquationSystem> for EvalEquationSystem {
    type Error = GaussError;

    fn try_from(system: EquationSystem) -> Result<Self> {
        let (a_matrix, b_vector) = system.to_parts()?;
        Ok(Self { a_matrix, b_vector })
    }
}

impl TryFrom<&str> for EvalEquationSystem {
    type Error = GaussError;

    fn try_from(text: &str) -> Result<Self> {
        Self::try_from(EquationSystem::parse(text)?)
    }
}

impl EvalEquationSystem {
    pub fn len(&self) -> usize {
        self.b_vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b_vector.is_empty()
    }

    /// Solves the system on private copies and builds the report.
    /// The stored system is left untouched, so repeated calls agree.
    pub fn evaluate(&self, options: &SolveOptions) -> Result<SolutionReport> {
        let n = self.len();
        if let Some(max) = options.max_equations {
            if n > max {
                return Err(ParseError::TooManyEquations { count: n, max }.into());
            }
        }

        info!("Solving system of {} equations", n);
        let result = options.algorithm().solve(&self.a_matrix, &self.b_vector)?;
        debug!("Solver metadata: {:?}", result.metadata);

        let (verification, max_abs_residual) = if options.verify {
            let checks = self.check(&result.x)?;
            let max = verify::max_abs_residual(&self.a_matrix, &result.x, &self.b_vector)?;
            info!("Max absolute residual: {:e}", max);
            (Some(checks), Some(max))
        } else {
            (None, None)
        };

        Ok(SolutionReport {
            solution: result.x,
            row_swaps: result.metadata.row_swaps,
            verification,
            max_abs_residual,
            precision: options.precision,
        })
    }

    /// Recomputes every original equation with `x`.
    pub fn check(&self, x: &[f64]) -> Result<Vec<EquationCheck>> {
        let lhs = self.a_matrix.mul_vec(x)?;
        let residuals = verify::residuals(&self.a_matrix, x, &self.b_vector)?;
        Ok(lhs
            .into_iter()
            .zip(&self.b_vector)
            .zip(residuals)
            .enumerate()
            .map(|(i, ((lhs, &rhs), residual))| EquationCheck {
                equation: i + 1,
                lhs,
                rhs,
                residual,
            })
            .collect())
    }
}

/// Parses `text` and solves it in one go.
pub fn solve_text(text: &str, options: &SolveOptions) -> Result<SolutionReport> {
    EvalEquationSystem::try_from(text)?.evaluate(options)
}
