use faer::prelude::SolverCore;

use crate::{error::LinalgError, matrix::Matrix};

/// Determinants below this fraction of the Hadamard bound are treated as singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Multiply two matrices.
///
/// # Arguments
///
/// * `a` - The left operand with shape (m, k).
/// * `b` - The right operand with shape (k, n).
///
/// # Returns
///
/// The product with shape (m, n).
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the inner dimensions differ.
///
/// Example:
///
/// ```
/// use planar_linalg::{multiply, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows(&[[5.0], [6.0]]);
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.to_row_major(), vec![17.0, 39.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, LinalgError> {
    if a.ncols() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            lhs_rows: a.nrows(),
            lhs_cols: a.ncols(),
            rhs_rows: b.nrows(),
            rhs_cols: b.ncols(),
        });
    }

    let mut out = faer::Mat::<f64>::zeros(a.nrows(), b.ncols());
    let mut out_view = out.as_mut();

    faer::linalg::matmul::matmul(
        &mut out_view,
        a.as_faer(),
        b.as_faer(),
        None,
        1.0,
        faer::Parallelism::None,
    );

    Ok(Matrix::from_faer(out))
}

#[rustfmt::skip]
fn determinant3x3(m: &[f64; 9]) -> f64 {
    m[0] * (m[4] * m[8] - m[5] * m[7]) -
    m[1] * (m[3] * m[8] - m[5] * m[6]) +
    m[2] * (m[3] * m[7] - m[4] * m[6])
}

#[rustfmt::skip]
fn adjugate3x3(m: &[f64; 9]) -> [f64; 9] {
    [
        m[4] * m[8] - m[5] * m[7],  // [0, 0]
        m[2] * m[7] - m[1] * m[8],  // [0, 1]
        m[1] * m[5] - m[2] * m[4],  // [0, 2]
        m[5] * m[6] - m[3] * m[8],  // [1, 0]
        m[0] * m[8] - m[2] * m[6],  // [1, 1]
        m[2] * m[3] - m[0] * m[5],  // [1, 2]
        m[3] * m[7] - m[4] * m[6],  // [2, 0]
        m[1] * m[6] - m[0] * m[7],  // [2, 1]
        m[0] * m[4] - m[1] * m[3],  // [2, 2]
    ]
}

fn to_array9(a: &Matrix) -> [f64; 9] {
    let mut m = [0.0; 9];
    for (dst, src) in m.iter_mut().zip(a.to_row_major()) {
        *dst = src;
    }
    m
}

/// Compute the determinant of a square matrix.
///
/// # Errors
///
/// Returns [`LinalgError::NotSquare`] if the matrix is not square.
pub fn determinant(a: &Matrix) -> Result<f64, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare(a.nrows(), a.ncols()));
    }
    match a.nrows() {
        0 => Ok(1.0),
        3 => Ok(determinant3x3(&to_array9(a))),
        _ => Ok(a.as_faer().determinant()),
    }
}

// product of the row norms, an upper bound of |det| (Hadamard's inequality)
fn hadamard_bound(a: &Matrix) -> f64 {
    (0..a.nrows())
        .filter_map(|i| a.row(i))
        .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
        .product()
}

fn is_singular(det: f64, bound: f64) -> bool {
    if !det.is_finite() || det == 0.0 || bound == 0.0 {
        return true;
    }
    det.abs() <= SINGULAR_TOLERANCE * bound
}

/// Invert a square matrix.
///
/// 3x3 matrices are inverted through the adjugate; other sizes use a partial
/// pivoting LU decomposition.
///
/// # Errors
///
/// * [`LinalgError::NotSquare`] if the matrix is not square.
/// * [`LinalgError::SingularMatrix`] if the determinant is zero, not finite or
///   negligible with respect to the product of the row norms.
pub fn invert(a: &Matrix) -> Result<Matrix, LinalgError> {
    let det = determinant(a)?;
    let n = a.nrows();

    if is_singular(det, hadamard_bound(a)) {
        return Err(LinalgError::SingularMatrix(det));
    }

    let inv = if n == 3 {
        let adj = adjugate3x3(&to_array9(a));
        let inv_det = 1.0 / det;
        let mut inv_m = [0.0; 9];
        for (dst, src) in inv_m.iter_mut().zip(adj.iter()) {
            *dst = src * inv_det;
        }
        Matrix::from_row_major(3, 3, &inv_m)?
    } else {
        Matrix::from_faer(a.as_faer().partial_piv_lu().inverse())
    };

    if !inv.is_finite() {
        return Err(LinalgError::SingularMatrix(det));
    }

    Ok(inv)
}
