use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::error::RuntimeError;

/// A dense matrix of double-precision reals stored row-major.
///
/// Invariant: `data.len() == rows * cols`, and both dimensions are at least
/// one for every value reachable from a script.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from a row-major buffer.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidShape` if a dimension is zero or the
    /// buffer length is not `rows * cols`.
    ///
    /// # Example
    /// ```
    /// use calmat::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::new(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, RuntimeError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(data.len()) {
            return Err(RuntimeError::InvalidShape { rows,
                                                    cols,
                                                    len: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidShape` for empty or ragged input.
    ///
    /// # Example
    /// ```
    /// use calmat::interpreter::value::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.dims(), (2, 3));
    /// assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RuntimeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<f64> = rows.iter()
                                 .filter(|r| r.len() == cols)
                                 .flat_map(|r| r.iter().copied())
                                 .collect();
        Self::new(rows.len(), cols, data)
    }

    /// Creates a `rows x cols` matrix of zeros.
    ///
    /// Callers guarantee non-zero dimensions.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self { rows,
               cols,
               data: vec![0.0; rows * cols] }
    }

    /// Creates a matrix with ones on the leading diagonal and zeros
    /// elsewhere. Rectangular shapes are allowed.
    #[must_use]
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows.min(cols) {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Creates a matrix whose element `(i, j)` is `f(i, j)`.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The row-major element buffer.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Row `i` as a slice.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over the rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// Sum of every column.
    #[must_use]
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for row in self.rows_iter() {
            for (s, x) in sums.iter_mut().zip(row) {
                *s += x;
            }
        }
        sums
    }

    /// Sum of every row.
    #[must_use]
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows_iter().map(|r| r.iter().sum()).collect()
    }

    /// Sum of the diagonal elements.
    #[must_use]
    pub fn trace(&self) -> f64 {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).sum()
    }

    /// Applies `f` to every element, producing a new matrix.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { rows: self.rows,
               cols: self.cols,
               data: self.data.iter().map(|&x| f(x)).collect() }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

/// Formats the matrix the way `save` writes it: one line per row, each value
/// with six decimals followed by two spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for x in row {
                write!(f, "{x:.6}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
