//! The virtual C-arm: turns batches of poses into X-ray source and target points.

use geometry::{compose_rotations, get_basis, Angles, ShapeMismatch};
use nalgebra::{RealField, Vector3};
use ndarray::Array3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{
    config::detector::DetectorConfig,
    error::Result,
    grid::{Coef, PixelGrid},
    pose::{Pose, PoseBatch},
    rays::RaySet,
    subsample::{NoLog, Subsample, SubsampleLog},
};

/// 6 DoF X-ray detector system, modelled on a C-arm.
///
/// Holds the pose-independent pixel grid and, when subsampling is enabled, the
/// random source used to pick pixels. Every call to `generate` recomputes the
/// rays from scratch.
#[derive(Clone, Debug)]
pub struct Detector<T: RealField + Copy, R = StdRng> {
    grid: PixelGrid<T>,
    subsample: Option<Subsample>,
    rng: R,
}

impl<T: RealField + Copy> Detector<T, StdRng> {

    /// Detector whose subsample draws are reproducible from `seed`
    pub fn with_seed(height: usize, width: usize, delx: T, dely: T, subsample: Option<usize>, seed: u64) -> Result<Self> {
        Self::new(height, width, delx, dely, subsample, StdRng::seed_from_u64(seed))
    }

    /// Detector described by `config`, seeded from `seed` or from system entropy
    pub fn from_config(config: &DetectorConfig, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let (delx, dely) = config.spacing_mm();
        Self::new(
            config.height, config.width,
            nalgebra::convert(delx), nalgebra::convert(dely),
            config.subsample,
            rng,
        )
    }
}

impl<T: RealField + Copy, R: Rng> Detector<T, R> {

    /// `height` × `width` pixels spaced `delx` × `dely`. If `subsample` is
    /// given, each call returns that many randomly chosen pixels, drawn with
    /// `rng`.
    pub fn new(height: usize, width: usize, delx: T, dely: T, subsample: Option<usize>, rng: R) -> Result<Self> {
        let grid = PixelGrid::new(height, width, delx, dely)?;
        let subsample = subsample.map(|k| Subsample::new(k, grid.len())).transpose()?;
        debug!(height, width, n_subsample = subsample.map(|s| s.k()), "detector constructed");
        Ok(Self { grid, subsample, rng })
    }

    pub fn height(&self) -> usize { self.grid.height }
    pub fn width (&self) -> usize { self.grid.width  }
    pub fn delx  (&self) -> T     { self.grid.delx   }
    pub fn dely  (&self) -> T     { self.grid.dely   }
    pub fn grid  (&self) -> &PixelGrid<T> { &self.grid }

    /// Subsample size, if subsampling is enabled
    pub fn n_subsample(&self) -> Option<usize> { self.subsample.map(|s| s.k()) }

    /// Number of rays generated per exam
    pub fn n_rays(&self) -> usize { self.n_subsample().unwrap_or(self.grid.len()) }

    /// Create source and target points for X-rays to trace through the volume.
    ///
    /// `sdr`, `rotations` and `translations` hold one entry per exam and must
    /// have the same length.
    pub fn generate(
        &mut self,
        sdr: &[T],
        rotations: &[Angles<T>],
        translations: &[Vector3<T>],
    ) -> Result<RaySet<T>> {
        self.generate_logged(sdr, rotations, translations, &mut NoLog)
    }

    /// As `generate`, additionally passing any subsampled pixel indices to `log`
    pub fn generate_logged(
        &mut self,
        sdr: &[T],
        rotations: &[Angles<T>],
        translations: &[Vector3<T>],
        log: &mut impl SubsampleLog,
    ) -> Result<RaySet<T>> {
        let n_exams = sdr.len();
        ShapeMismatch::check("rotations"   , n_exams, rotations   .len())?;
        ShapeMismatch::check("translations", n_exams, translations.len())?;

        // Detector frames before and after rigidly moving the whole device
        let frames = get_basis(sdr, &compose_rotations(rotations))?;
        let frames: Vec<_> = frames.iter()
            .zip(translations)
            .map(|(frame, translation)| frame.translated(translation))
            .collect();

        // Pick the pixels: one draw shared by all exams in the batch
        let subsample = self.subsample.map(|s| s.draw(&mut self.rng));
        let coefs: Vec<Coef<T>> = match &subsample {
            Some(indices) => indices.iter().map(|&i| self.grid[i]).collect(),
            None          => self.grid.coefs().to_vec(),
        };
        if let Some(indices) = &subsample {
            trace!(?indices, "subsampled pixels");
            log.record(indices);
        }

        let source = Array3::from_shape_fn((n_exams, 1, 3), |(b, _, k)| frames[b].source[k]);
        let mut target = Array3::from_elem((n_exams, coefs.len(), 3), T::zero());
        for (mut rays, frame) in target.outer_iter_mut().zip(&frames) {
            for (mut ray, &[t, s]) in rays.outer_iter_mut().zip(&coefs) {
                let point = frame.target(t, s);
                for k in 0..3 { ray[k] = point[k]; }
            }
        }

        debug!(n_exams, n_rays = coefs.len(), subsampled = subsample.is_some(), "generated rays");
        Ok(RaySet { source, target, subsample })
    }

    /// `generate` for a slice of whole poses
    pub fn generate_poses(&mut self, poses: &[Pose<T>]) -> Result<RaySet<T>> {
        let PoseBatch { sdr, rotations, translations } = poses.iter().copied().collect();
        self.generate(&sdr, &rotations, &translations)
    }
}
