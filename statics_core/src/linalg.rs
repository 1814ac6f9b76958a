//! # Dense Linear Algebra
//!
//! A small row-major dense matrix and an LU decomposition with partial
//! pivoting (`P·A = L·U`), sized for the small systems the solvers build
//! (2×2 for beams, `2n×2n` for trusses).
//!
//! ## Example
//!
//! ```rust
//! use statics_core::linalg::{DenseMatrix, LuDecomposition};
//!
//! let a = DenseMatrix::from_rows(&[vec![4.0, 3.0], vec![6.0, 3.0]]).unwrap();
//! let lu = LuDecomposition::factor(&a).unwrap();
//! let x = lu.solve(&[10.0, 12.0]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 2.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, StaticsResult};

/// Relative pivot threshold below which a matrix is treated as singular.
///
/// Pivots are compared against the largest absolute entry of the original
/// matrix so the test is independent of the stiffness scale.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Square-or-rectangular dense matrix stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        DenseMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Build from a slice of equally long rows
    pub fn from_rows(rows: &[Vec<f64>]) -> StaticsResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != n_cols) {
            return Err(AnalysisError::invalid_input(
                "rows",
                format!("{} rows", n_rows),
                "All rows must have the same length",
            ));
        }
        Ok(DenseMatrix {
            rows: n_rows,
            cols: n_cols,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at (row, col)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Overwrite entry at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Accumulate into entry at (row, col) (stiffness assembly)
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] += value;
    }

    /// Largest absolute entry (0.0 for an empty matrix)
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0f64, |acc, v| acc.max(v.abs()))
    }

    /// Matrix-vector product
    pub fn mul_vec(&self, x: &[f64]) -> StaticsResult<Vec<f64>> {
        if x.len() != self.cols {
            return Err(AnalysisError::matrix_failed(format!(
                "vector length {} does not match {} columns",
                x.len(),
                self.cols
            )));
        }
        Ok((0..self.rows)
            .map(|i| {
                let row = &self.data[i * self.cols..(i + 1) * self.cols];
                row.iter().zip(x).map(|(a, b)| a * b).sum()
            })
            .collect())
    }

    /// Sub-matrix picking the given row and column indices, in order
    pub fn select(&self, row_idx: &[usize], col_idx: &[usize]) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(row_idx.len(), col_idx.len());
        for (i, &r) in row_idx.iter().enumerate() {
            for (j, &c) in col_idx.iter().enumerate() {
                out.set(i, j, self.get(r, c));
            }
        }
        out
    }

    /// True if the matrix equals its transpose within `tol`
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| (0..i).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }
}

/// LU factorization with partial (row) pivoting
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    n: usize,
    /// Combined storage: strictly-lower part is L (unit diagonal), upper part is U
    lu: DenseMatrix,
    /// Row permutation: row `i` of `P·A` is row `perm[i]` of `A`
    perm: Vec<usize>,
    /// +1.0 / -1.0 depending on the parity of the row swaps
    sign: f64,
}

impl LuDecomposition {
    /// Factor a square matrix.
    ///
    /// Fails with [`AnalysisError::MatrixSolutionFailed`] if the matrix is not
    /// square, is empty of scale, or has a pivot below the singularity
    /// tolerance (a mechanism in structural terms).
    pub fn factor(a: &DenseMatrix) -> StaticsResult<Self> {
        if !a.is_square() {
            return Err(AnalysisError::matrix_failed(format!(
                "matrix is {}x{}, expected square",
                a.rows(),
                a.cols()
            )));
        }

        let n = a.rows();
        let scale = a.max_abs();
        if n > 0 && scale == 0.0 {
            return Err(AnalysisError::matrix_failed("matrix is identically zero"));
        }
        let threshold = SINGULARITY_TOLERANCE * scale;

        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for k in 0..n {
            // Partial pivoting: largest magnitude in column k at or below the diagonal
            let mut pivot_row = k;
            let mut pivot_val = lu.get(k, k).abs();
            for i in (k + 1)..n {
                let v = lu.get(i, k).abs();
                if v > pivot_val {
                    pivot_val = v;
                    pivot_row = i;
                }
            }

            if pivot_val <= threshold {
                return Err(AnalysisError::matrix_failed(format!(
                    "singular matrix: pivot {:.3e} in column {} of {}",
                    pivot_val, k, n
                )));
            }

            if pivot_row != k {
                for j in 0..n {
                    let tmp = lu.get(k, j);
                    lu.set(k, j, lu.get(pivot_row, j));
                    lu.set(pivot_row, j, tmp);
                }
                perm.swap(k, pivot_row);
                sign = -sign;
            }

            let pivot = lu.get(k, k);
            for i in (k + 1)..n {
                let factor = lu.get(i, k) / pivot;
                lu.set(i, k, factor);
                if factor != 0.0 {
                    for j in (k + 1)..n {
                        let updated = lu.get(i, j) - factor * lu.get(k, j);
                        lu.set(i, j, updated);
                    }
                }
            }
        }

        Ok(LuDecomposition { n, lu, perm, sign })
    }

    /// Size of the factored system
    pub fn size(&self) -> usize {
        self.n
    }

    /// Solve `A·x = b` by forward and back substitution
    pub fn solve(&self, b: &[f64]) -> StaticsResult<Vec<f64>> {
        if b.len() != self.n {
            return Err(AnalysisError::matrix_failed(format!(
                "right-hand side has {} entries, expected {}",
                b.len(),
                self.n
            )));
        }

        // Forward substitution: L·y = P·b
        let mut x: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        for i in 0..self.n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum;
        }

        // Back substitution: U·x = y
        for i in (0..self.n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..self.n {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum / self.lu.get(i, i);
        }

        Ok(x)
    }

    /// Determinant of the factored matrix
    pub fn determinant(&self) -> f64 {
        (0..self.n).fold(self.sign, |acc, i| acc * self.lu.get(i, i))
    }

    /// Full inverse, one column solve at a time
    pub fn inverse(&self) -> StaticsResult<DenseMatrix> {
        let mut inv = DenseMatrix::zeros(self.n, self.n);
        let mut e = vec![0.0; self.n];
        for col in 0..self.n {
            e.iter_mut().for_each(|v| *v = 0.0);
            e[col] = 1.0;
            let x = self.solve(&e)?;
            for (row, value) in x.into_iter().enumerate() {
                inv.set(row, col, value);
            }
        }
        Ok(inv)
    }
}

/// Convenience: factor and solve in one call
pub fn solve(a: &DenseMatrix, b: &[f64]) -> StaticsResult<Vec<f64>> {
    LuDecomposition::factor(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_requires_pivoting() {
        // Zero in the leading position forces a row swap
        let a = DenseMatrix::from_rows(&[
            vec![0.0, 2.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![3.0, 0.0, 1.0],
        ])
        .unwrap();
        let x_true = [1.0, -2.0, 3.0];
        let b = a.mul_vec(&x_true).unwrap();

        let x = solve(&a, &b).unwrap();
        for (got, want) in x.iter().zip(x_true.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_singular_matrix_rejected() {
        let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        let err = LuDecomposition::factor(&a).unwrap_err();
        assert_eq!(err.error_code(), "MATRIX_SOLUTION_FAILED");
    }

    #[test]
    fn test_zero_matrix_rejected() {
        let a = DenseMatrix::zeros(3, 3);
        assert!(LuDecomposition::factor(&a).is_err());
    }

    #[test]
    fn test_non_square_rejected() {
        let a = DenseMatrix::zeros(2, 3);
        assert!(LuDecomposition::factor(&a).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_determinant_and_inverse() {
        let a = DenseMatrix::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let lu = LuDecomposition::factor(&a).unwrap();
        assert_relative_eq!(lu.determinant(), 10.0, epsilon = 1e-12);

        let inv = lu.inverse().unwrap();
        assert_relative_eq!(inv.get(0, 0), 0.6, epsilon = 1e-12);
        assert_relative_eq!(inv.get(0, 1), -0.7, epsilon = 1e-12);
        assert_relative_eq!(inv.get(1, 0), -0.2, epsilon = 1e-12);
        assert_relative_eq!(inv.get(1, 1), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_select_and_symmetry() {
        let mut k = DenseMatrix::identity(4);
        k.add(0, 3, 2.0);
        k.add(3, 0, 2.0);
        assert!(k.is_symmetric(0.0));

        let sub = k.select(&[0, 3], &[0, 3]);
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.get(0, 1), 2.0);
        assert_eq!(sub.get(1, 1), 1.0);
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let lu = LuDecomposition::factor(&DenseMatrix::identity(2)).unwrap();
        assert!(lu.solve(&[1.0]).is_err());
    }
}
