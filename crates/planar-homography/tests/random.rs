use approx::assert_relative_eq;
use planar_homography::{Homography, HomographyError, HomogeneousPoint, PointSet};
use rand::{rngs::StdRng, Rng, SeedableRng};

const NUM_TRIALS: usize = 50;

fn random_homography_with(
    rng: &mut StdRng,
    max_translation: f64,
    max_perspective: f64,
) -> Homography {
    Homography::from_array([
        [
            1.0 + rng.random_range(-0.3..0.3),
            rng.random_range(-0.3..0.3),
            rng.random_range(-max_translation..max_translation),
        ],
        [
            rng.random_range(-0.3..0.3),
            1.0 + rng.random_range(-0.3..0.3),
            rng.random_range(-max_translation..max_translation),
        ],
        [
            rng.random_range(-max_perspective..max_perspective),
            rng.random_range(-max_perspective..max_perspective),
            1.0,
        ],
    ])
}

fn random_homography(rng: &mut StdRng) -> Homography {
    random_homography_with(rng, 5.0, 0.01)
}

fn random_points_in(rng: &mut StdRng, num_points: usize, extent: f64) -> Vec<[f64; 2]> {
    (0..num_points)
        .map(|_| [rng.random_range(0.0..extent), rng.random_range(0.0..extent)])
        .collect()
}

fn random_points(rng: &mut StdRng, num_points: usize) -> Vec<[f64; 2]> {
    random_points_in(rng, num_points, 10.0)
}

#[test]
fn roundtrip_apply_inverse() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..NUM_TRIALS {
        let h = random_homography(&mut rng);
        for [x, y] in random_points(&mut rng, 10) {
            let p = HomogeneousPoint::new(x, y);
            let q = h.apply_inverse(&h.apply(&p)?)?;
            assert_relative_eq!(q.x, p.x, epsilon = 1e-9);
            assert_relative_eq!(q.y, p.y, epsilon = 1e-9);
            assert_eq!(q.w, 1.0);
        }
    }
    Ok(())
}

#[test]
fn roundtrip_apply_inverse_pixel_scale() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..NUM_TRIALS {
        // unit norm like a DLT solution, translations dominate the diagonal
        let h = random_homography_with(&mut rng, 2e4, 1e-4);
        let h = h.scaled(1.0 / h.norm());
        for [x, y] in random_points_in(&mut rng, 10, 1000.0) {
            let p = HomogeneousPoint::new(x, y);
            let q = h.apply_inverse(&h.apply(&p)?)?;
            assert_relative_eq!(q.x, p.x, epsilon = 1e-6);
            assert_relative_eq!(q.y, p.y, epsilon = 1e-6);
        }
    }
    Ok(())
}

#[test]
fn estimate_recovers_homography() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(1);
    for num_points in [4, 6, 20] {
        for _ in 0..NUM_TRIALS {
            let expected = random_homography(&mut rng);
            let src = random_points(&mut rng, num_points);
            let dst = expected.apply_points(&src)?;

            let h = Homography::estimate(&PointSet::new(src.clone()), &PointSet::new(dst.clone()))?;

            // compare through reprojection, the matrix itself is only defined up to scale
            let reprojected = h.apply_points(&src)?;
            for (r, d) in reprojected.iter().zip(dst.iter()) {
                assert_relative_eq!(r[0], d[0], epsilon = 1e-4);
                assert_relative_eq!(r[1], d[1], epsilon = 1e-4);
            }
        }
    }
    Ok(())
}

#[test]
fn estimate_same_points_is_identity() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..NUM_TRIALS {
        let pts = PointSet::new(random_points(&mut rng, 8));
        let h = Homography::estimate(&pts, &pts)?.normalized();
        for (row, expected_row) in h
            .as_array()
            .iter()
            .zip(Homography::identity().as_array().iter())
        {
            for (v, e) in row.iter().zip(expected_row.iter()) {
                assert_relative_eq!(v, e, epsilon = 1e-6);
            }
        }
    }
    Ok(())
}

#[test]
fn scaled_estimate_projects_the_same() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(3);
    let expected = random_homography(&mut rng);
    let src = random_points(&mut rng, 8);
    let dst = expected.apply_points(&src)?;
    let h = Homography::estimate(&PointSet::new(src.clone()), &PointSet::new(dst))?;

    for scale in [-2.0, 1e-3, 42.0] {
        let hs = h.scaled(scale);
        for [x, y] in src.iter().copied() {
            let p = HomogeneousPoint::new(x, y);
            let (a, b) = (h.apply(&p)?, hs.apply(&p)?);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
            let (a, b) = (h.apply_inverse(&p)?, hs.apply_inverse(&p)?);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }
    Ok(())
}
