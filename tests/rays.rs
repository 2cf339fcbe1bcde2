use std::collections::HashSet;
use std::io::Write;

use float_eq::assert_float_eq;
use nalgebra::{Matrix3, Point3, Vector3};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use carm::{Detector, Pose, RaySet, read_config_file};
use geometry::{get_basis, rxyz};

fn xyz(p: Point3<f64>) -> [f64; 3] { p.coords.into() }

// ----- The worked example: 2x2 detector, C-arm at rest --------------------------------
#[test]
fn two_by_two_detector_at_rest() {
    let rotation = rxyz([0.0, 0.0, 0.0]);
    assert_eq!(rotation, Matrix3::identity());

    let frames = get_basis(&[100.0], &[rotation]).unwrap();
    let frame = frames.0[0];
    assert_eq!(xyz(frame.source), [ 100.0, 0.0, 0.0]);
    assert_eq!(xyz(frame.center), [-100.0, 0.0, 0.0]);
    assert_eq!(<[f64; 3]>::from(frame.u), [0.0, 1.0, 0.0]);
    assert_eq!(<[f64; 3]>::from(frame.v), [0.0, 0.0, 1.0]);

    let mut detector = Detector::with_seed(2, 2, 2.0, 2.0, None, 0).unwrap();
    assert_eq!(detector.grid().coefs(), &[[-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 1.0]]);

    let rays = detector.generate(&[100.0], &[[0.0, 0.0, 0.0]], &[Vector3::zeros()]).unwrap();
    let targets: Vec<_> = rays.targets(0).map(xyz).collect();
    assert_eq!(targets, vec![
        [-100.0, -1.0, -1.0],
        [-100.0, -1.0,  1.0],
        [-100.0,  1.0, -1.0],
        [-100.0,  1.0,  1.0],
    ]);
    // Each target is 200 from the source along the principal axis
    for n in 0..4 {
        assert_eq!(rays.directions()[[0, n, 0]], -200.0);
    }
}

// ----- Detector built from a configuration file ----------------------------------------
#[test]
fn detector_from_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"
        height    = 3
        width     = 5
        delx      = "0.5 cm"
        dely      = "2 mm"
        subsample = 7
    "#)?;
    let config = read_config_file(file.path())?;
    let mut detector = Detector::<f64>::from_config(&config, Some(3))?;
    assert_eq!(detector.height(), 3);
    assert_eq!(detector.width(), 5);
    assert_float_eq!(detector.delx(), 5.0, r2nd <= 1e-12);
    assert_float_eq!(detector.dely(), 2.0, r2nd <= 1e-12);
    assert_eq!(detector.n_subsample(), Some(7));

    let rays = detector.generate_poses(&[Pose::new(100.0, [0.0; 3], [0.0; 3])])?;
    assert_eq!(rays.target.shape(), &[1, 7, 3]);
    Ok(())
}

// ----- Reproducibility of subsample draws ----------------------------------------------
#[test]
fn seeded_detectors_draw_identical_subsamples() {
    let poses = [Pose::new(200.0, [0.2, 0.4, 0.6], [1.0, 2.0, 3.0])];
    let mut a = Detector::new(10, 10, 1.0, 1.0, Some(12), StdRng::seed_from_u64(5)).unwrap();
    let mut b = Detector::new(10, 10, 1.0, 1.0, Some(12), StdRng::seed_from_u64(5)).unwrap();
    for _ in 0..3 {
        assert_eq!(a.generate_poses(&poses).unwrap(), b.generate_poses(&poses).unwrap());
    }
}

#[test]
fn successive_calls_draw_fresh_subsamples() {
    let poses = [Pose::new(200.0, [0.0; 3], [0.0; 3])];
    let mut detector = Detector::with_seed(32, 32, 1.0, 1.0, Some(16), 11).unwrap();
    let mut log: Vec<Vec<usize>> = vec![];
    let (sdr, rot, trans) = (vec![poses[0].sdr], vec![poses[0].rotation], vec![poses[0].translation]);
    for _ in 0..5 {
        detector.generate_logged(&sdr, &rot, &trans, &mut log).unwrap();
    }
    assert_eq!(log.len(), 5);
    let distinct: HashSet<_> = log.iter().collect();
    assert!(distinct.len() > 1, "five identical draws of 16 out of 1024 pixels");
}

// ----- Properties that hold for any pose ----------------------------------------------
fn pose() -> impl Strategy<Value = Pose<f64>> {
    (1.0..1000.0_f64, [-7.0..7.0_f64, -7.0..7.0_f64, -7.0..7.0_f64], [-500.0..500.0_f64, -500.0..500.0_f64, -500.0..500.0_f64])
        .prop_map(|(sdr, rotation, translation)| Pose::new(sdr, rotation, translation))
}

fn untranslated(pose: Pose<f64>) -> Pose<f64> {
    Pose { translation: Vector3::zeros(), ..pose }
}

fn generate(pose: Pose<f64>, height: usize, width: usize) -> RaySet<f64> {
    Detector::with_seed(height, width, 1.3, 0.7, None, 0).unwrap()
        .generate_poses(&[pose]).unwrap()
}

proptest! {
    // Every target lies on the detector plane, 2·sdr from the source
    #[test]
    fn targets_lie_on_detector_plane(pose in pose(), height in 1..12_usize, width in 1..12_usize) {
        let rays = generate(pose, height, width);
        let frame = get_basis(&[pose.sdr], &[rxyz(pose.rotation)]).unwrap().0[0].translated(&pose.translation);
        let normal = frame.normal();
        let source = rays.source_point(0);
        assert_float_eq!(xyz(source), xyz(frame.source), abs_all <= 1e-9);
        for target in rays.targets(0) {
            let offset = (source - target).dot(&normal);
            assert_float_eq!(offset, 2.0 * pose.sdr, r2nd <= 1e-9);
            assert_float_eq!((target - frame.center).dot(&normal) / pose.sdr, 0.0, abs <= 1e-9);
        }
    }

    // Translating the C-arm moves source and every target by exactly the translation
    #[test]
    fn translation_shifts_everything(pose in pose(), height in 1..8_usize, width in 1..8_usize) {
        let moved = generate(pose, height, width);
        let still = generate(untranslated(pose), height, width);
        let t = pose.translation;
        assert_float_eq!(xyz(moved.source_point(0)), xyz(still.source_point(0) + t), abs_all <= 1e-9);
        for (m, s) in moved.targets(0).zip(still.targets(0)) {
            assert_float_eq!(xyz(m), xyz(s + t), abs_all <= 1e-9);
        }
        // Distances from the source are unchanged
        let (ml, sl) = (moved.lengths(), still.lengths());
        for (m, s) in ml.iter().zip(sl.iter()) {
            assert_float_eq!(*m, *s, r2nd <= 1e-9);
        }
    }

    // Subsampled targets are a subset of the full grid's targets
    #[test]
    fn subsample_selects_full_grid_rays(
        pose in pose(),
        (n_pixels_side, k) in (1..10_usize).prop_flat_map(|n| (Just(n), 1..=n*n)),
        seed in any::<u64>(),
    ) {
        let full = generate(pose, n_pixels_side, n_pixels_side);
        let mut detector = Detector::new(n_pixels_side, n_pixels_side, 1.3, 0.7, Some(k), StdRng::seed_from_u64(seed)).unwrap();
        let rays = detector.generate_poses(&[pose]).unwrap();
        let indices = rays.subsample.clone().unwrap();
        prop_assert_eq!(rays.n_rays(), k);
        prop_assert_eq!(indices.iter().collect::<HashSet<_>>().len(), k);
        for (ray, &pixel) in indices.iter().enumerate() {
            prop_assert!(pixel < n_pixels_side * n_pixels_side);
            prop_assert_eq!(rays.target_point(0, ray), full.target_point(0, pixel));
        }
        prop_assert_eq!(rays.source_point(0), full.source_point(0));
    }
}
