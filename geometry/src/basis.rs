//! X-ray source, detector centre and detector-plane basis of a rotated C-arm.
//!
//! Before translation the source and the detector centre lie on opposite sides
//! of the isocentre, each at distance `rho` from it, along the first column of
//! the rotation. The second and third columns, normalized, span the detector
//! plane. Grid coefficients expressed in physical lengths therefore map to 3-D
//! offsets from the centre through a single linear combination of the basis.

use nalgebra::{Matrix3, Point3, RealField, Vector3};
use ndarray::Array3;

use crate::ShapeMismatch;

/// Source, detector centre and in-plane basis of one exam
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorFrame<T: RealField + Copy> {
    pub source: Point3<T>,
    pub center: Point3<T>,
    pub u: Vector3<T>,
    pub v: Vector3<T>,
}

impl<T: RealField + Copy> DetectorFrame<T> {

    /// Untranslated frame for source-to-detector radius `rho` and `rotation`
    pub fn new(rho: T, rotation: &Matrix3<T>) -> Self {
        let scaled = *rotation * rho;
        let source = Point3::from(scaled.column(0).into_owned());
        let center = Point3::from(-source.coords);
        // Normalize even though `rotation` should be orthonormal already: keeps
        // the basis unit length in the presence of rounding drift.
        let u = rotation.column(1).into_owned().normalize();
        let v = rotation.column(2).into_owned().normalize();
        Self { source, center, u, v }
    }

    /// Rigidly move the whole device by `translation`
    pub fn translated(&self, translation: &Vector3<T>) -> Self {
        Self {
            source: self.source + *translation,
            center: self.center + *translation,
            ..*self
        }
    }

    /// The point on the detector plane with coefficients `(t, s)` along `(u, v)`
    #[inline]
    pub fn target(&self, t: T, s: T) -> Point3<T> {
        self.center + self.u * t + self.v * s
    }

    /// Detector plane normal, pointing from the detector towards the source
    pub fn normal(&self) -> Vector3<T> { (self.source - self.center).normalize() }
}

/// Frames of a whole batch of exams
#[derive(Clone, Debug, PartialEq)]
pub struct BasisBatch<T: RealField + Copy>(pub Vec<DetectorFrame<T>>);

impl<T: RealField + Copy> BasisBatch<T> {
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<DetectorFrame<T>> { self.0.iter() }

    /// Source points, shaped `(B, 1, 3)` so that they broadcast over rays
    pub fn source(&self) -> Array3<T> { self.points(|f| f.source) }

    /// Detector centres, shaped `(B, 1, 3)`
    pub fn center(&self) -> Array3<T> { self.points(|f| f.center) }

    /// Detector plane bases, shaped `(B, 2, 3)`: `[b, 0, ..]` is `u`, `[b, 1, ..]` is `v`
    pub fn basis(&self) -> Array3<T> {
        Array3::from_shape_fn((self.len(), 2, 3), |(b, i, k)| {
            let frame = &self.0[b];
            if i == 0 { frame.u[k] } else { frame.v[k] }
        })
    }

    fn points(&self, pick: impl Fn(&DetectorFrame<T>) -> Point3<T>) -> Array3<T> {
        Array3::from_shape_fn((self.len(), 1, 3), |(b, _, k)| pick(&self.0[b])[k])
    }
}

impl<'a, T: RealField + Copy> IntoIterator for &'a BasisBatch<T> {
    type Item = &'a DetectorFrame<T>;
    type IntoIter = std::slice::Iter<'a, DetectorFrame<T>>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Untranslated detector frames for a batch of radii and rotations
pub fn get_basis<T: RealField + Copy>(
    rho: &[T],
    rotations: &[Matrix3<T>],
) -> Result<BasisBatch<T>, ShapeMismatch> {
    ShapeMismatch::check("rotations", rho.len(), rotations.len())?;
    Ok(BasisBatch(
        rho.iter()
            .zip(rotations)
            .map(|(&rho, rotation)| DetectorFrame::new(rho, rotation))
            .collect()
    ))
}
