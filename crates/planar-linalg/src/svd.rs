use crate::matrix::Matrix;

/// Full singular value decomposition `A = U * S * V^T`.
///
/// The singular values are sorted in descending order and the columns of `U`
/// and the rows of `V^T` follow the same order. A matrix with more columns than
/// rows has only `rows` singular values; the trailing rows of `V^T` span the
/// null space and correspond to zero singular values.
#[derive(Debug, Clone)]
pub struct SvdDecomposition {
    u: Matrix,
    singular_values: Vec<f64>,
    v_t: Matrix,
}

impl SvdDecomposition {
    /// The left singular vectors with shape (rows, rows).
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// The singular values in descending order, `min(rows, cols)` entries.
    pub fn singular_values(&self) -> &[f64] {
        &self.singular_values
    }

    /// The transposed right singular vectors with shape (cols, cols).
    pub fn v_t(&self) -> &Matrix {
        &self.v_t
    }

    /// The smallest singular value, zero when the matrix has more columns than rows.
    pub fn smallest_singular_value(&self) -> f64 {
        if self.singular_values.len() < self.v_t.nrows() {
            return 0.0;
        }
        self.singular_values.last().copied().unwrap_or(0.0)
    }

    /// The last row of `V^T`: the unit vector minimizing `|A x|`.
    pub fn null_space_vector(&self) -> Vec<f64> {
        match self.v_t.nrows() {
            0 => Vec::new(),
            n => self.v_t.row(n - 1).unwrap_or_default(),
        }
    }
}

/// Compute the full singular value decomposition of a matrix.
///
/// # Arguments
///
/// * `a` - The input matrix with shape (m, n).
///
/// # Returns
///
/// The decomposition with `U` (m, m), the singular values and `V^T` (n, n).
///
/// Example:
///
/// ```
/// use planar_linalg::{decompose_svd, Matrix};
///
/// let a = Matrix::from_rows(&[[3.0, 0.0], [0.0, 5.0]]);
/// let svd = decompose_svd(&a);
/// assert!((svd.singular_values()[0] - 5.0).abs() < 1e-12);
/// assert!((svd.singular_values()[1] - 3.0).abs() < 1e-12);
/// ```
pub fn decompose_svd(a: &Matrix) -> SvdDecomposition {
    let (rows, cols) = (a.nrows(), a.ncols());

    if rows == 0 || cols == 0 {
        return SvdDecomposition {
            u: Matrix::identity(rows),
            singular_values: Vec::new(),
            v_t: Matrix::identity(cols),
        };
    }

    let svd = a.as_faer().svd();
    let s = svd.s_diagonal();
    let (u, v) = (svd.u(), svd.v());

    // sort the computed singular values, the padded null directions stay last
    let k = s.nrows();
    let mut order = (0..k).collect::<Vec<_>>();
    order.sort_by(|&i, &j| s.read(j).total_cmp(&s.read(i)));

    let u_col = |c: usize| if c < k { order[c] } else { c };
    let v_col = |r: usize| if r < k { order[r] } else { r };

    let u_sorted = faer::Mat::from_fn(rows, rows, |i, j| u.read(i, u_col(j)));
    let v_t_sorted = faer::Mat::from_fn(cols, cols, |i, j| v.read(j, v_col(i)));

    SvdDecomposition {
        u: Matrix::from_faer(u_sorted),
        singular_values: order.iter().map(|&i| s.read(i)).collect(),
        v_t: Matrix::from_faer(v_t_sorted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::multiply;
    use approx::assert_relative_eq;

    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[test]
    fn test_svd_descending_order() {
        let a = Matrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 7.0, 0.0], [0.0, 0.0, 3.0]]);
        let svd = decompose_svd(&a);
        let s = svd.singular_values();
        assert_eq!(s.len(), 3);
        assert_relative_eq!(s[0], 7.0, epsilon = 1e-12);
        assert_relative_eq!(s[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(s[2], 1.0, epsilon = 1e-12);

        // the last row of V^T is the direction of the smallest singular value
        let last = svd.null_space_vector();
        assert_relative_eq!(last[0].abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(svd.smallest_singular_value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_svd_reconstruction() -> Result<(), crate::LinalgError> {
        let a = Matrix::from_rows(&[[2.0, -1.0, 0.5], [1.0, 3.0, -2.0]]);
        let svd = decompose_svd(&a);
        assert_eq!(svd.u().nrows(), 2);
        assert_eq!(svd.v_t().nrows(), 3);

        // A = U * S * V^T using the thin part of the decomposition
        let s = svd.singular_values();
        let mut s_mat = vec![0.0; 2 * 3];
        s_mat[0] = s[0];
        s_mat[4] = s[1];
        let s_mat = Matrix::from_row_major(2, 3, &s_mat)?;
        let rec = multiply(&multiply(svd.u(), &s_mat)?, svd.v_t())?;
        for (r, e) in rec.to_row_major().iter().zip(a.to_row_major().iter()) {
            assert_relative_eq!(r, e, epsilon = 1e-10);
        }
        Ok(())
    }

    #[test]
    fn test_svd_wide_null_space() -> Result<(), crate::LinalgError> {
        // two equations, three unknowns: the null space is spanned by (1, 1, 1)
        let a = Matrix::from_rows(&[[1.0, -1.0, 0.0], [0.0, 1.0, -1.0]]);
        let svd = decompose_svd(&a);
        assert_eq!(svd.singular_values().len(), 2);
        assert_eq!(svd.smallest_singular_value(), 0.0);

        let h = svd.null_space_vector();
        assert_eq!(h.len(), 3);
        assert_relative_eq!(norm(&h), 1.0, epsilon = 1e-12);

        let residual = multiply(&a, &Matrix::from_column(&h))?;
        for r in residual.to_row_major() {
            assert_relative_eq!(r, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(h[0], h[1], epsilon = 1e-12);
        assert_relative_eq!(h[1], h[2], epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_svd_empty() {
        let svd = decompose_svd(&Matrix::zeros(0, 2));
        assert!(svd.singular_values().is_empty());
        assert_eq!(svd.v_t().nrows(), 2);
        assert_eq!(svd.null_space_vector(), vec![0.0, 1.0]);
    }
}
