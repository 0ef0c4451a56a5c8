use gauss_core::{GaussCoreError, Matrix};
use num_traits::Float;

#[derive(Debug, Clone)]
pub struct SolveResult<V: Float, M> {
    pub x: Vec<V>,   // Solution vector
    pub metadata: M, // Metadata about the solve process
}

// --- Algorithm Trait Definition ---
/// Trait representing a specific linear system solving algorithm.
/// Generic over the Matrix type it supports.
pub trait SolveAlgorithm<M: Matrix> {
    /// The numeric type the algorithm operates on.
    type Value: Float + std::fmt::Debug + Default;
    type Metadata: std::fmt::Debug;

    /// Solves the linear system Ax = b for x.
    ///
    /// Implementations must not modify `a` or `b`; they work on private copies,
    /// so concurrent calls never share working storage.
    ///
    /// # Arguments
    ///
    /// * `a` - The coefficient matrix A.
    /// * `b` - The right-hand side vector b.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or a classified `GaussCoreError`.
    fn solve(
        &self,
        a: &M,
        b: &[Self::Value],
    ) -> Result<SolveResult<Self::Value, Self::Metadata>, GaussCoreError>;

    // Helper for input validation, can be called by implementations.
    fn validate_inputs(&self, a: &M, b: &[Self::Value]) -> Result<(), GaussCoreError> {
        validate_system(a.dims(), b.len())
    }
}

/// Checks the shape preconditions of a square system: n >= 1, A is n×n and
/// b has length n.
pub fn validate_system(dims: (usize, usize), b_len: usize) -> Result<(), GaussCoreError> {
    let (rows, cols) = dims;
    if rows == 0 {
        return Err(GaussCoreError::InvalidDimensions(
            "System must have at least one equation".to_string(),
        ));
    }
    if rows != cols {
        return Err(GaussCoreError::InvalidDimensions(format!(
            "Matrix A must be square (dims: {}x{})",
            rows, cols
        )));
    }
    if rows != b_len {
        return Err(GaussCoreError::InvalidDimensions(format!(
            "Matrix A rows ({}) must match RHS vector b length ({})",
            rows, b_len
        )));
    }
    Ok(())
}

// --- Algorithm Implementations ---

pub mod gaussian_elimination; // Dense Gaussian elimination with partial pivoting

pub use gaussian_elimination::GaussianEliminationMetadata;

// --- Algorithm Struct Definitions ---

/// Pivot magnitude below which a matrix is reported as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Gaussian elimination with partial (row) pivoting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianElimination {
    /// A post-swap pivot with `|pivot| < tolerance` aborts the solve with
    /// `GaussCoreError::SingularMatrix`. Must be finite and non-negative.
    pub tolerance: f64,
}

impl Default for GaussianElimination {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl GaussianElimination {
    /// Creates a new instance with the default pivot tolerance (1e-12).
    pub fn new() -> Self {
        Self::default()
    }
    /// Creates a new instance with the specified pivot tolerance.
    pub fn with_params(tolerance: f64) -> Self {
        Self { tolerance }
    }
}
