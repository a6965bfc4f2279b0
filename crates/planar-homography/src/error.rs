use planar_linalg::LinalgError;

/// An error type for homography estimation and projection.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HomographyError {
    /// Error when fewer correspondences than the minimum are given.
    #[error("At least 4 point correspondences are required, got {0}")]
    InsufficientPoints(usize),

    /// Error when source and destination have different lengths.
    #[error("Source has {0} points but destination has {1}")]
    MismatchedPointCount(usize, usize),

    /// Error when the homography is not invertible.
    #[error("Homography is singular and cannot be inverted (det = {0})")]
    SingularMatrix(f64),

    /// Error when a point is mapped to infinity.
    #[error("Point ({x}, {y}, {w}) is projected to infinity")]
    DegenerateProjection {
        /// The x coordinate of the offending input point.
        x: f64,
        /// The y coordinate of the offending input point.
        y: f64,
        /// The homogeneous coordinate of the offending input point.
        w: f64,
    },

    /// Error when a matrix of the wrong shape is used as a homography.
    #[error("Homography must be 3x3, got {0}x{1}")]
    InvalidMatrixShape(usize, usize),

    /// Any other error raised by the linear algebra kernel.
    #[error("Linear algebra error: {0}")]
    Linalg(#[source] LinalgError),
}

impl From<LinalgError> for HomographyError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::SingularMatrix(det) => HomographyError::SingularMatrix(det),
            other => HomographyError::Linalg(other),
        }
    }
}
