/// An error type for the linear algebra kernel.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Error when the data length does not match the requested shape.
    #[error("Data length ({0}) does not match the matrix shape ({1}x{2})")]
    InvalidShape(usize, usize, usize),

    /// Error when the inner dimensions of a product do not agree.
    #[error("Cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// Error when a square matrix is required.
    #[error("Matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),

    /// Error when the matrix cannot be inverted.
    #[error("Matrix is singular and cannot be inverted (det = {0})")]
    SingularMatrix(f64),
}
