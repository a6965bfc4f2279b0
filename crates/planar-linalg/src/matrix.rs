use crate::error::LinalgError;

/// A dense real matrix that carries its own dimensions.
///
/// The storage is a [`faer::Mat`]; every constructor validates the shape
/// against the provided data so later operations can rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    inner: faer::Mat<f64>,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows.
    /// * `cols` - The number of columns.
    /// * `data` - The entries in row-major order, with length `rows * cols`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidShape`] if the data length does not match.
    ///
    /// Example:
    ///
    /// ```
    /// use planar_linalg::Matrix;
    ///
    /// let m = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m.get(1, 0), Some(4.0));
    /// ```
    pub fn from_row_major(rows: usize, cols: usize, data: &[f64]) -> Result<Self, LinalgError> {
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape(data.len(), rows, cols));
        }
        Ok(Self {
            inner: faer::Mat::from_fn(rows, cols, |i, j| data[i * cols + j]),
        })
    }

    /// Create a matrix from fixed-size rows.
    pub fn from_rows<const R: usize, const C: usize>(rows: &[[f64; C]; R]) -> Self {
        Self {
            inner: faer::Mat::from_fn(R, C, |i, j| rows[i][j]),
        }
    }

    /// Create a single column matrix.
    pub fn from_column(values: &[f64]) -> Self {
        Self {
            inner: faer::Mat::from_fn(values.len(), 1, |i, _| values[i]),
        }
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            inner: faer::Mat::zeros(rows, cols),
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            inner: faer::Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 }),
        }
    }

    /// The number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// The number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Read an entry, or `None` when the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows() && col < self.ncols() {
            Some(self.inner.read(row, col))
        } else {
            None
        }
    }

    /// Copy a row into a vector, or `None` when the index is out of bounds.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.nrows() {
            return None;
        }
        Some((0..self.ncols()).map(|j| self.inner.read(row, j)).collect())
    }

    /// Copy the entries out in row-major order.
    pub fn to_row_major(&self) -> Vec<f64> {
        let (rows, cols) = (self.nrows(), self.ncols());
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(self.inner.read(i, j));
            }
        }
        data
    }

    /// The largest absolute entry, zero for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        let mut max_val = 0.0f64;
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                max_val = max_val.max(self.inner.read(i, j).abs());
            }
        }
        max_val
    }

    /// Whether all entries are finite.
    pub fn is_finite(&self) -> bool {
        (0..self.ncols()).all(|j| (0..self.nrows()).all(|i| self.inner.read(i, j).is_finite()))
    }

    pub(crate) fn from_faer(inner: faer::Mat<f64>) -> Self {
        Self { inner }
    }

    pub(crate) fn as_faer(&self) -> faer::MatRef<'_, f64> {
        self.inner.as_ref()
    }
}
