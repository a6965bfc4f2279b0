#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::HomographyError;

/// Direct linear transform coefficient matrix.
pub mod dlt;

mod homography;
pub use homography::{Homography, MIN_CORRESPONDENCES};

mod point;
pub use point::{HomogeneousPoint, PointSet};

mod projection;
pub use projection::{project, project_inverse};

/// Trace sinks for verbose projections.
pub mod trace;
pub use trace::{LogSink, MemorySink, NoopSink, TraceSink};
