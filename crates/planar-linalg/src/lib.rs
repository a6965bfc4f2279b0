#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::LinalgError;

mod matrix;
pub use matrix::Matrix;

/// Matrix products, determinants and inverses.
pub mod ops;
pub use ops::{determinant, invert, multiply};

/// Singular value decomposition.
pub mod svd;
pub use svd::{decompose_svd, SvdDecomposition};
