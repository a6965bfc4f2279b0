use planar_linalg::{decompose_svd, invert, multiply, Matrix};

use crate::{
    dlt,
    error::HomographyError,
    point::{HomogeneousPoint, PointSet},
};

/// Minimum number of correspondences to fix the 8 degrees of freedom.
pub const MIN_CORRESPONDENCES: usize = 4;

/// A planar projective transform, defined up to scale.
///
/// The matrix is stored row-major and maps homogeneous source points to
/// homogeneous destination points: `p_dst ~ H * p_src`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homography {
    mat: [[f64; 3]; 3],
}

impl Homography {
    /// Create a homography from a row-major 3x3 array.
    pub fn from_array(mat: [[f64; 3]; 3]) -> Self {
        Self { mat }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// The row-major entries.
    pub fn as_array(&self) -> &[[f64; 3]; 3] {
        &self.mat
    }

    /// Create a homography from a kernel matrix.
    ///
    /// # Errors
    ///
    /// Returns [`HomographyError::InvalidMatrixShape`] if the matrix is not 3x3.
    pub fn from_matrix(m: &Matrix) -> Result<Self, HomographyError> {
        if m.nrows() != 3 || m.ncols() != 3 {
            return Err(HomographyError::InvalidMatrixShape(m.nrows(), m.ncols()));
        }
        let mut mat = [[0.0; 3]; 3];
        for (i, v) in m.to_row_major().into_iter().enumerate() {
            mat[i / 3][i % 3] = v;
        }
        Ok(Self { mat })
    }

    /// The homography as a 3x3 kernel matrix.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_rows(&self.mat)
    }

    /// Estimate the homography mapping `source` onto `destination` with the
    /// direct linear transform.
    ///
    /// The homogeneous system is solved by taking the right singular vector of
    /// the smallest singular value, reshaped row-major into the 3x3 matrix. The
    /// result has unit Frobenius norm and is not rescaled.
    ///
    /// Nearly collinear configurations give an unreliable result.
    ///
    /// # Arguments
    ///
    /// * `source` - The source 2d points with shape (N, 2).
    /// * `destination` - The destination 2d points with shape (N, 2).
    ///
    /// # Errors
    ///
    /// * [`HomographyError::MismatchedPointCount`] if the lengths differ.
    /// * [`HomographyError::InsufficientPoints`] if fewer than 4 points are given.
    ///
    /// Example:
    ///
    /// ```
    /// use planar_homography::{Homography, HomogeneousPoint, PointSet};
    ///
    /// let src = PointSet::from([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    /// let dst = PointSet::from([[1.0, 1.0], [2.0, 1.0], [1.0, 2.0], [2.0, 2.0]]);
    /// let h = Homography::estimate(&src, &dst).unwrap();
    /// let p = h.apply(&HomogeneousPoint::new(0.5, 0.5)).unwrap();
    /// assert!((p.x - 1.5).abs() < 1e-9 && (p.y - 1.5).abs() < 1e-9);
    /// ```
    pub fn estimate(source: &PointSet, destination: &PointSet) -> Result<Self, HomographyError> {
        if source.len() != destination.len() {
            return Err(HomographyError::MismatchedPointCount(
                source.len(),
                destination.len(),
            ));
        }

        if source.len() < MIN_CORRESPONDENCES {
            return Err(HomographyError::InsufficientPoints(source.len()));
        }

        let mat_a = dlt::coefficient_matrix(source, destination)?;
        log::debug!(
            "Solving DLT system of {}x{} from {} correspondences",
            mat_a.nrows(),
            mat_a.ncols(),
            source.len()
        );

        // take the direction of the smallest singular value
        let svd = decompose_svd(&mat_a);
        let h = svd.null_space_vector();
        log::debug!(
            "Smallest singular value: {:e}",
            svd.smallest_singular_value()
        );

        let mut mat = [[0.0; 3]; 3];
        for (i, v) in h.into_iter().enumerate().take(dlt::NUM_UNKNOWNS) {
            mat[i / 3][i % 3] = v;
        }

        Ok(Self { mat })
    }

    /// Map a point through the homography.
    ///
    /// Computes `t = H * p` and returns `(t.x / t.z, t.y / t.z, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`HomographyError::DegenerateProjection`] if `t.z` is zero or the
    /// perspective divide is not finite.
    pub fn apply(&self, point: &HomogeneousPoint) -> Result<HomogeneousPoint, HomographyError> {
        let t = multiply(&self.to_matrix(), &point.to_column())?.to_row_major();
        let (tx, ty, tz) = (t[0], t[1], t[2]);

        let degenerate = || HomographyError::DegenerateProjection {
            x: point.x,
            y: point.y,
            w: point.w,
        };

        if tz == 0.0 {
            return Err(degenerate());
        }

        let (u, v) = (tx / tz, ty / tz);
        if !u.is_finite() || !v.is_finite() {
            return Err(degenerate());
        }

        Ok(HomogeneousPoint::new(u, v))
    }

    /// Map a point through the inverse homography.
    ///
    /// # Errors
    ///
    /// * [`HomographyError::SingularMatrix`] if the homography is not invertible.
    /// * [`HomographyError::DegenerateProjection`] as in [`Homography::apply`].
    pub fn apply_inverse(
        &self,
        point: &HomogeneousPoint,
    ) -> Result<HomogeneousPoint, HomographyError> {
        self.inverse()?.apply(point)
    }

    /// Compute the inverse homography.
    ///
    /// # Errors
    ///
    /// Returns [`HomographyError::SingularMatrix`] if the homography is not invertible.
    pub fn inverse(&self) -> Result<Self, HomographyError> {
        let inv = invert(&self.to_matrix())?;
        Self::from_matrix(&inv)
    }

    /// Map a batch of plain 2d points, failing on the first degenerate one.
    pub fn apply_points(&self, points: &[[f64; 2]]) -> Result<Vec<[f64; 2]>, HomographyError> {
        points
            .iter()
            .map(|p| {
                let q = self.apply(&HomogeneousPoint::from(*p))?;
                Ok([q.x, q.y])
            })
            .collect()
    }

    /// Multiply every entry by `scale`.
    ///
    /// A nonzero scale describes the same projective transform.
    pub fn scaled(&self, scale: f64) -> Self {
        let mut mat = self.mat;
        for v in mat.iter_mut().flatten() {
            *v *= scale;
        }
        Self { mat }
    }

    /// The Frobenius norm of the matrix.
    pub fn norm(&self) -> f64 {
        self.mat.iter().flatten().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Rescale so the bottom-right entry is one.
    ///
    /// Falls back to unit Frobenius norm when that entry vanishes, and returns
    /// the matrix unchanged when it is zero.
    pub fn normalized(&self) -> Self {
        let h22 = self.mat[2][2];
        if h22.abs() > f64::EPSILON {
            return self.scaled(1.0 / h22);
        }
        match self.norm() {
            n if n > 0.0 => self.scaled(1.0 / n),
            _ => *self,
        }
    }
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}
