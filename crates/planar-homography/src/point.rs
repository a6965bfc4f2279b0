use std::fmt;

use planar_linalg::Matrix;

/// An ordered set of 2d points.
///
/// No duplicate or collinearity check is made: nearly collinear points give an
/// unreliable homography rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<[f64; 2]>,
}

impl PointSet {
    /// Create a point set from a list of `[x, y]` coordinates.
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points }
    }

    /// The points as a slice.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, [f64; 2]> {
        self.points.iter()
    }
}

impl From<Vec<[f64; 2]>> for PointSet {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::new(points)
    }
}

impl From<&[[f64; 2]]> for PointSet {
    fn from(points: &[[f64; 2]]) -> Self {
        Self::new(points.to_vec())
    }
}

impl<const N: usize> From<[[f64; 2]; N]> for PointSet {
    fn from(points: [[f64; 2]; N]) -> Self {
        Self::new(points.to_vec())
    }
}

/// A 2d point in homogeneous coordinates `(x, y, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousPoint {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The homogeneous coordinate.
    pub w: f64,
}

impl HomogeneousPoint {
    /// Create the point `(x, y, 1)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, w: 1.0 }
    }

    /// Create a point with an explicit homogeneous coordinate.
    pub fn from_homogeneous(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }

    /// The coordinates as an array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.w]
    }

    /// The 3x1 column matrix of the point.
    pub fn to_column(&self) -> Matrix {
        Matrix::from_column(&self.to_array())
    }
}

impl From<[f64; 2]> for HomogeneousPoint {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl fmt::Display for HomogeneousPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} , {} , {}", self.x, self.y, self.w)
    }
}
