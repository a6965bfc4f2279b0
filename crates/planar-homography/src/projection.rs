use crate::{
    error::HomographyError, homography::Homography, point::HomogeneousPoint, trace::TraceSink,
};

/// Project a source point to the destination plane.
///
/// When `verbose` is set the input and output coordinates are written to `sink`.
/// Tracing never changes the returned point and is skipped on failure.
///
/// # Arguments
///
/// * `homography` - The homography from source to destination.
/// * `xy` - The source point.
/// * `verbose` - Whether to trace the projection.
/// * `sink` - The trace destination.
///
/// Example:
///
/// ```
/// use planar_homography::{project, Homography, HomogeneousPoint, MemorySink};
///
/// let sink = MemorySink::new();
/// let uv = project(&Homography::identity(), &HomogeneousPoint::new(4.0, 10.0), true, &sink).unwrap();
/// assert_eq!(uv, HomogeneousPoint::new(4.0, 10.0));
/// assert_eq!(sink.lines()[1], "(x,y) : 4 , 10 , 1");
/// ```
pub fn project(
    homography: &Homography,
    xy: &HomogeneousPoint,
    verbose: bool,
    sink: &dyn TraceSink,
) -> Result<HomogeneousPoint, HomographyError> {
    let uv = homography.apply(xy)?;
    if verbose {
        sink.emit("...Homography Loading...");
        sink.emit(&format!("(x,y) : {xy}"));
        sink.emit(&format!("(u,v) : {uv}"));
    }
    Ok(uv)
}

/// Project a destination point back to the source plane.
///
/// Same tracing behaviour as [`project`], with the destination point first.
///
/// # Errors
///
/// Propagates [`HomographyError::SingularMatrix`] when the homography is not invertible.
pub fn project_inverse(
    homography: &Homography,
    uv: &HomogeneousPoint,
    verbose: bool,
    sink: &dyn TraceSink,
) -> Result<HomogeneousPoint, HomographyError> {
    let xy = homography.apply_inverse(uv)?;
    if verbose {
        sink.emit("...Inverse Homography Loading...");
        sink.emit(&format!("(u,v) : {uv}"));
        sink.emit(&format!("(x,y) : {xy}"));
    }
    Ok(xy)
}
