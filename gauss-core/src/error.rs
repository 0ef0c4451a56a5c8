use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of the elimination pipeline in which a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Elimination,
    BackSubstitution,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Elimination => write!(f, "forward elimination"),
            Phase::BackSubstitution => write!(f, "back substitution"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaussCoreError {
    /// Malformed input: caller-correctable, reported before any computation.
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Singular or nearly singular matrix: pivot {pivot:e} at elimination step {step} is below tolerance")]
    SingularMatrix { step: usize, pivot: f64 },

    #[error("Non-finite value in row {row} during {phase} (step {step})")]
    NonFinite { phase: Phase, step: usize, row: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GaussCoreError {
    /// True for failures caused by the caller's input shape or parameters
    /// rather than by the numbers themselves.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            GaussCoreError::InvalidDimensions(_) | GaussCoreError::InvalidParameter(_)
        )
    }
}
