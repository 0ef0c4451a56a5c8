//! # Gaussian elimination core library
//!
//! Provides the dense matrix type, the row operations and the error taxonomy
//! shared by the solver and its callers.

pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod traits;

pub use dense_matrix::DenseMatrix;
pub use error::{GaussCoreError, Phase};
pub use traits::{Matrix, Vector};
