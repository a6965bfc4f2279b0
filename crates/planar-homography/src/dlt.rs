use planar_linalg::{LinalgError, Matrix};

use crate::point::PointSet;

/// Number of unknowns in the homogeneous system, the entries of the 3x3 matrix.
pub const NUM_UNKNOWNS: usize = 9;

/// Build the 2N x 9 coefficient matrix of the direct linear transform.
///
/// For a source point `(x, y)` and its destination `(x', y')` the rows are:
///
/// ```text
/// [ -x, -y, -1,  0,  0,  0, x * x', x' * y, x' ]
/// [  0,  0,  0, -x, -y, -1, x * y', y' * y, y' ]
/// ```
///
/// PRECONDITION: `source` and `destination` have the same length, checked in
/// debug builds. In release builds the extra points of the longer set are ignored.
pub fn coefficient_matrix(
    source: &PointSet,
    destination: &PointSet,
) -> Result<Matrix, LinalgError> {
    debug_assert_eq!(source.len(), destination.len());
    let num_points = source.len().min(destination.len());
    let mut data = Vec::with_capacity(2 * num_points * NUM_UNKNOWNS);

    for (src, dst) in source.iter().zip(destination.iter()) {
        let (x, y) = (src[0], src[1]);
        let (xd, yd) = (dst[0], dst[1]);

        // x-equation
        data.extend_from_slice(&[-x, -y, -1.0, 0.0, 0.0, 0.0, x * xd, xd * y, xd]);
        // y-equation
        data.extend_from_slice(&[0.0, 0.0, 0.0, -x, -y, -1.0, x * yd, yd * y, yd]);
    }

    Matrix::from_row_major(2 * num_points, NUM_UNKNOWNS, &data)
}
