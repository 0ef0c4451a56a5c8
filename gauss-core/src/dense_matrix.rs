use serde::{Deserialize, Serialize};

use crate::{error::GaussCoreError, ops, traits::Matrix};

/// Represents a dense matrix stored in row-major order on the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDenseMatrix")]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>, // Data stored row-major: data[row * cols + col]
}

/// Unchecked wire form; deserialization goes through [`DenseMatrix::new`].
#[derive(Deserialize)]
struct RawDenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawDenseMatrix> for DenseMatrix {
    type Error = GaussCoreError;

    fn try_from(raw: RawDenseMatrix) -> Result<Self, Self::Error> {
        DenseMatrix::new(raw.rows, raw.cols, raw.data)
    }
}

impl DenseMatrix {
    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, GaussCoreError> {
        if data.len() != rows * cols {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a slice of rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GaussCoreError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GaussCoreError::InvalidDimensions(format!(
                    "Row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a new DenseMatrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Gets the element at the specified row and column (immutable).
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Gets the element at the specified row and column (mutable).
    /// Returns None if indices are out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `i` as a slice. Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row `i` as a mutable slice. Panics if `i >= rows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns row `src` immutably together with row `dst` mutably.
    /// Panics if the indices are equal or out of bounds.
    pub fn row_pair_mut(&mut self, src: usize, dst: usize) -> (&[f64], &mut [f64]) {
        assert_ne!(src, dst, "row_pair_mut requires two distinct rows");
        let cols = self.cols;
        if src < dst {
            let (head, tail) = self.data.split_at_mut(dst * cols);
            (&head[src * cols..(src + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(src * cols);
            (&tail[..cols], &mut head[dst * cols..(dst + 1) * cols])
        }
    }

    /// Swaps two full rows. A no-op when `a == b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Iterates over the rows of the matrix.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, an empty matrix has no rows to yield anyway
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Computes `y = self * x`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>, GaussCoreError> {
        if x.len() != self.cols {
            return Err(GaussCoreError::InvalidDimensions(format!(
                "Matrix columns ({}) must match vector length ({})",
                self.cols,
                x.len()
            )));
        }
        Ok(self.iter_rows().map(|row| ops::dot(row, x)).collect())
    }
}

impl Matrix for DenseMatrix {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn to_dense(&self) -> DenseMatrix {
        self.clone()
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, GaussCoreError, Matrix};

    #[test]
    fn test_dense_matrix_new_invalid_len() {
        let matrix = DenseMatrix::new(2, 2, vec![1.0, 2.0, 3.0]);
        match matrix.err().unwrap() {
            GaussCoreError::InvalidDimensions(msg) => assert!(msg.contains("Data length")),
            _ => panic!("Expected InvalidDimensions error"),
        }
    }

    #[test]
    fn test_dense_matrix_from_rows() {
        let matrix = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.dims(), (2, 2));
        assert!(matrix.is_square());
        assert_eq!(matrix.data(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(matrix.get(1, 0), Some(&3.0));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn test_dense_matrix_from_rows_ragged() {
        let matrix = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        match matrix.err().unwrap() {
            GaussCoreError::InvalidDimensions(msg) => assert!(msg.contains("Row 1")),
            _ => panic!("Expected InvalidDimensions error"),
        }
    }

    #[test]
    fn test_swap_rows() {
        let mut matrix =
            DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        matrix.swap_rows(2, 0);
        assert_eq!(matrix.row(0), &[5.0, 6.0]);
        assert_eq!(matrix.row(1), &[3.0, 4.0]);
        assert_eq!(matrix.row(2), &[1.0, 2.0]);
        matrix.swap_rows(1, 1);
        assert_eq!(matrix.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_row_pair_mut() {
        let mut matrix = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        {
            let (src, dst) = matrix.row_pair_mut(1, 0);
            dst[0] += src[0];
        }
        assert_eq!(matrix.row(0), &[4.0, 2.0]);
        let (src, dst) = matrix.row_pair_mut(0, 1);
        assert_eq!(src, &[4.0, 2.0]);
        assert_eq!(dst, &mut [3.0, 4.0]);
    }

    #[test]
    fn test_deserialize_checks_data_length() {
        let err = serde_json::from_str::<DenseMatrix>(r#"{"rows":2,"cols":2,"data":[1.0,0.0,0.0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Data length (3)"));

        let matrix: DenseMatrix =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1.0,0.0,0.0,1.0]}"#).unwrap();
        assert_eq!(matrix, DenseMatrix::identity(2));
    }

    #[test]
    fn test_identity_mul_vec() {
        let eye = DenseMatrix::identity(3);
        assert_eq!(eye.mul_vec(&[1.0, -2.0, 3.5]).unwrap(), vec![1.0, -2.0, 3.5]);
        assert!(eye.mul_vec(&[1.0]).is_err());
    }
}
