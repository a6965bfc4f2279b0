use argh::FromArgs;

use planar::homography::{
    project, project_inverse, Homography, HomogeneousPoint, LogSink, PointSet,
};

const SAMPLE_POINTS: [[f64; 2]; 4] = [[1.0, 2.0], [5.0, 3.0], [4.0, 10.0], [1.0, 6.0]];

fn parse_point(value: &str) -> Result<[f64; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate `{s}`: {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

#[derive(FromArgs)]
/// Estimate a homography from point correspondences and project points with it
struct Args {
    /// source point as `x,y`, repeat for each correspondence
    #[argh(option, from_str_fn(parse_point))]
    src: Vec<[f64; 2]>,

    /// destination point as `x,y`, repeat for each correspondence
    #[argh(option, from_str_fn(parse_point))]
    dst: Vec<[f64; 2]>,

    /// index of the source point projected to the destination plane
    #[argh(option, default = "2")]
    forward_index: usize,

    /// index of the destination point projected back to the source plane
    #[argh(option, default = "1")]
    inverse_index: usize,

    /// do not trace the projections
    #[argh(switch)]
    quiet: bool,
}

fn select(points: &PointSet, index: usize, name: &str) -> Result<HomogeneousPoint, String> {
    points
        .points()
        .get(index)
        .map(|p| HomogeneousPoint::from(*p))
        .ok_or_else(|| format!("{name} index {index} out of range ({} points)", points.len()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    // fall back to the sample correspondences
    let src = if args.src.is_empty() {
        PointSet::from(SAMPLE_POINTS)
    } else {
        PointSet::new(args.src)
    };
    let dst = if args.dst.is_empty() {
        PointSet::from(SAMPLE_POINTS)
    } else {
        PointSet::new(args.dst)
    };

    let homography = Homography::estimate(&src, &dst)?;

    println!("Homography Matrix :\n");
    for row in homography.as_array() {
        println!("{} {} {}", row[0], row[1], row[2]);
    }
    println!();

    let sink = LogSink::new("homography_demo");
    let verbose = !args.quiet;

    let xy = select(&src, args.forward_index, "forward")?;
    let uv = project(&homography, &xy, verbose, &sink)?;
    println!("forward: ({xy}) -> ({uv})");

    let uv = select(&dst, args.inverse_index, "inverse")?;
    let xy = project_inverse(&homography, &uv, verbose, &sink)?;
    println!("inverse: ({uv}) -> ({xy})");

    log::debug!("Done");

    Ok(())
}
