//! Dense complex matrix with Kronecker product and matrix-vector multiply

use crate::error::MathError;
use crate::Result;
use num_complex::Complex64;
use rayon::prelude::*;

/// Row count above which `mul_vec` distributes rows across the rayon pool
const PARALLEL_ROW_THRESHOLD: usize = 1 << 12;

/// Dense complex matrix in row-major order
///
/// Carries explicit row and column counts so that every multiplication site
/// can check operand shapes instead of trusting nested-array lengths. The
/// grid length always equals `rows * cols`; construction enforces it and no
/// operation mutates a matrix in place afterwards.
///
/// # Example
/// ```
/// use qreg_math::Matrix;
///
/// let a = Matrix::identity(2);
/// let b = Matrix::identity(3);
/// let c = a.kron(&b);
/// assert_eq!(c.rows(), 6);
/// assert_eq!(c.cols(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    /// Create a zero-initialized matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        }
    }

    /// Create a dim x dim identity matrix
    ///
    /// Callers that mean "the identity on n qubits" pass `1 << n`.
    /// `identity(1)` is the 1x1 unit, the seed for iterated Kronecker
    /// products.
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim, dim);
        for i in 0..dim {
            m.data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        m
    }

    /// Build a 2x2 matrix from a const gate table
    pub fn from_array_2x2(grid: &[[Complex64; 2]; 2]) -> Self {
        Self {
            rows: 2,
            cols: 2,
            data: grid.iter().flatten().copied().collect(),
        }
    }

    /// Build a matrix from row-major data
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `data.len() != rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MathError::DimensionMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.cols + col]
    }

    /// Row-major view of the grid
    #[inline]
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Kronecker (tensor) product `self (x) other`
    ///
    /// The result has shape `(self.rows * other.rows) x (self.cols *
    /// other.cols)`; block (i, j), of shape `other.rows x other.cols`,
    /// equals `self[i][j] * other`. Iterating this product over per-qubit
    /// factors is how a one-qubit operator is expanded to act on a full
    /// register.
    pub fn kron(&self, other: &Matrix) -> Matrix {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut out = Matrix::zeros(rows, cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                let a_ij = self.get(i, j);
                for k in 0..other.rows {
                    let out_row = i * other.rows + k;
                    let base = out_row * cols + j * other.cols;
                    for l in 0..other.cols {
                        out.data[base + l] = a_ij * other.get(k, l);
                    }
                }
            }
        }

        out
    }

    /// Matrix x column-vector multiplication
    ///
    /// Each output element is the dot product of one row against `vec`.
    /// Rows are independent, so large matrices distribute rows across the
    /// rayon pool; the result is identical to the serial path.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `self.cols != vec.len()`.
    pub fn mul_vec(&self, vec: &[Complex64]) -> Result<Vec<Complex64>> {
        if self.cols != vec.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.cols,
                actual: vec.len(),
            });
        }

        let dot = |row: &[Complex64]| -> Complex64 {
            row.iter().zip(vec.iter()).map(|(a, b)| a * b).sum()
        };

        let out = if self.rows >= PARALLEL_ROW_THRESHOLD {
            self.data.par_chunks(self.cols).map(dot).collect()
        } else {
            self.data.chunks(self.cols).map(dot).collect()
        };

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    const ONE: Complex64 = Complex64::new(1.0, 0.0);

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.data().iter().all(|&z| z == ZERO));
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(4);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { ONE } else { ZERO };
                assert_eq!(m.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_from_data_length_check() {
        let result = Matrix::from_data(2, 2, vec![ONE; 3]);
        assert_eq!(
            result,
            Err(MathError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_kron_known_values() {
        // X (x) I in the {|00>, |01>, |10>, |11>} basis: flips the high bit
        let x = Matrix::from_data(2, 2, vec![ZERO, ONE, ONE, ZERO]).unwrap();
        let id = Matrix::identity(2);
        let xi = x.kron(&id);

        assert_eq!(xi.rows(), 4);
        assert_eq!(xi.cols(), 4);
        assert_eq!(xi.get(0, 2), ONE);
        assert_eq!(xi.get(1, 3), ONE);
        assert_eq!(xi.get(2, 0), ONE);
        assert_eq!(xi.get(3, 1), ONE);
        assert_eq!(xi.get(0, 0), ZERO);
        assert_eq!(xi.get(0, 1), ZERO);
    }

    #[test]
    fn test_kron_with_unit_seed() {
        // 1x1 identity is a neutral left factor
        let x = Matrix::from_data(2, 2, vec![ZERO, ONE, ONE, ZERO]).unwrap();
        let seeded = Matrix::identity(1).kron(&x);
        assert_eq!(seeded, x);
    }

    #[test]
    fn test_kron_scales_blocks() {
        let half = Complex64::new(0.5, 0.0);
        let a = Matrix::from_data(1, 1, vec![half]).unwrap();
        let id = Matrix::identity(2);
        let scaled = a.kron(&id);
        assert_eq!(scaled.get(0, 0), half);
        assert_eq!(scaled.get(1, 1), half);
        assert_eq!(scaled.get(0, 1), ZERO);
    }

    #[test]
    fn test_mul_vec_identity() {
        let id = Matrix::identity(4);
        let vec = vec![
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, 0.5),
            Complex64::new(-0.5, 0.0),
            Complex64::new(0.0, -0.5),
        ];
        assert_eq!(id.mul_vec(&vec).unwrap(), vec);
    }

    #[test]
    fn test_mul_vec_rotates_basis() {
        let x = Matrix::from_data(2, 2, vec![ZERO, ONE, ONE, ZERO]).unwrap();
        let out = x.mul_vec(&[ONE, ZERO]).unwrap();
        assert_eq!(out, vec![ZERO, ONE]);
    }

    #[test]
    fn test_mul_vec_complex_dot() {
        let i = Complex64::new(0.0, 1.0);
        let m = Matrix::from_data(1, 2, vec![i, i]).unwrap();
        let out = m.mul_vec(&[i, ONE]).unwrap();
        // i*i + i*1 = -1 + i
        assert_relative_eq!(out[0].re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(out[0].im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mul_vec_dimension_mismatch() {
        let m = Matrix::identity(4);
        let result = m.mul_vec(&[ONE, ZERO]);
        assert_eq!(
            result,
            Err(MathError::DimensionMismatch {
                expected: 4,
                actual: 2
            })
        );
    }
}
