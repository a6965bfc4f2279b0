#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use planar_linalg as linalg;

#[doc(inline)]
pub use planar_homography as homography;
