//! Ray endpoints handed to the volume renderer.

use nalgebra::{Point3, RealField, Vector3};
use ndarray::{Array2, Array3};

use crate::Index1_u;

/// Sources and targets of all rays in a batch of exams.
///
/// `source` has shape `(B, 1, 3)` and broadcasts against `target`, which has
/// shape `(B, N, 3)`, with `N` either the whole detector or the subsample
/// size. When subsampling was active, `subsample` holds the pixel indices of
/// the `N` targets, in order; the same pixels are used for every exam.
#[derive(Clone, Debug, PartialEq)]
pub struct RaySet<T: RealField + Copy> {
    pub source: Array3<T>,
    pub target: Array3<T>,
    pub subsample: Option<Vec<Index1_u>>,
}

impl<T: RealField + Copy> RaySet<T> {

    /// Number of exams in the batch
    pub fn n_exams(&self) -> usize { self.target.shape()[0] }

    /// Number of rays per exam
    pub fn n_rays(&self) -> usize { self.target.shape()[1] }

    pub fn source_point(&self, exam: usize) -> Point3<T> {
        Point3::new(self.source[[exam, 0, 0]], self.source[[exam, 0, 1]], self.source[[exam, 0, 2]])
    }

    pub fn target_point(&self, exam: usize, ray: usize) -> Point3<T> {
        Point3::new(self.target[[exam, ray, 0]], self.target[[exam, ray, 1]], self.target[[exam, ray, 2]])
    }

    /// All targets of one exam
    pub fn targets(&self, exam: usize) -> impl Iterator<Item = Point3<T>> + '_ {
        (0..self.n_rays()).map(move |ray| self.target_point(exam, ray))
    }

    /// `target - source` for every ray, shaped like `target`
    pub fn directions(&self) -> Array3<T> {
        Array3::from_shape_fn(self.target.dim(), |(b, n, k)| {
            self.target[[b, n, k]] - self.source[[b, 0, k]]
        })
    }

    /// Source-to-target distance of every ray, shaped `(B, N)`
    pub fn lengths(&self) -> Array2<T> {
        Array2::from_shape_fn((self.n_exams(), self.n_rays()), |(b, n)| {
            let d: Vector3<T> = self.target_point(b, n) - self.source_point(b);
            d.norm()
        })
    }
}
