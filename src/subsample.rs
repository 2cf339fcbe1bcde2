//! Random selection of detector pixels.
//!
//! Each call draws a fresh subset: the first `k` entries of a uniformly random
//! permutation of all pixel indices. Nothing is cached between calls.

use rand::{seq::SliceRandom, Rng};

use crate::error::{Error, Result};
use crate::Index1_u;

/// Number of pixels to keep per call, validated against the detector size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subsample {
    k: usize,
    n_pixels: usize,
}

impl Subsample {
    /// Requesting more pixels than exist, or none at all, is an error rather
    /// than a silent cap.
    pub fn new(k: usize, n_pixels: usize) -> Result<Self> {
        if k == 0 || k > n_pixels {
            return Err(Error::InvalidSubsample { requested: k, available: n_pixels });
        }
        Ok(Self { k, n_pixels })
    }

    pub fn k(&self) -> usize { self.k }

    /// `k` distinct pixel indices in `0..n_pixels`
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Index1_u> {
        let mut indices: Vec<Index1_u> = (0..self.n_pixels).collect();
        let (chosen, _) = indices.partial_shuffle(rng, self.k);
        chosen.to_vec()
    }
}

/// Receives the pixel indices drawn by each subsampled call.
pub trait SubsampleLog {
    fn record(&mut self, indices: &[Index1_u]);
}

/// Caller-owned history: one entry appended per call
impl SubsampleLog for Vec<Vec<Index1_u>> {
    fn record(&mut self, indices: &[Index1_u]) { self.push(indices.to_vec()); }
}

/// Discards everything
pub struct NoLog;

impl SubsampleLog for NoLog {
    fn record(&mut self, _indices: &[Index1_u]) {}
}
