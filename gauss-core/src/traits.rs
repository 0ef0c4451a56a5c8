use std::fmt::Debug;

use num_traits::Float;

use crate::DenseMatrix;

/// Generic trait representing a matrix of `f64` elements.
/// Implementations can be dense or structured; the solver only needs the
/// shape and a dense copy.
pub trait Matrix: Debug {
    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Copies the matrix into a freshly allocated row-major buffer.
    /// Solvers use this to obtain private working storage.
    fn to_dense(&self) -> DenseMatrix;
}

/// Generic trait representing a vector.
pub trait Vector: Debug {
    type Value: Float + Debug + Default;

    /// Returns the number of elements in the vector.
    fn len(&self) -> usize;

    /// Checks if the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[Self::Value];

    /// True when no element is NaN or infinite.
    fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|v| v.is_finite())
    }
}

impl Vector for [f64] {
    type Value = f64;

    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl Vector for Vec<f64> {
    type Value = f64;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_slice(&self) -> &[f64] {
        self
    }
}
