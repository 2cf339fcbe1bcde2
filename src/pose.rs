use geometry::Angles;
use nalgebra::{RealField, Vector3};

/// Position of the C-arm for one exam
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose<T: RealField + Copy> {
    /// Source-to-detector radius: half the source-to-detector distance
    pub sdr: T,
    /// `[theta, phi, gamma]` in radians
    pub rotation: Angles<T>,
    /// `[bx, by, bz]`: where the isocentre sits in the volume's frame
    pub translation: Vector3<T>,
}

impl<T: RealField + Copy> Pose<T> {
    pub fn new(sdr: T, rotation: Angles<T>, [bx, by, bz]: [T; 3]) -> Self {
        Self { sdr, rotation, translation: Vector3::new(bx, by, bz) }
    }
}

/// Poses split into the per-component batches consumed by `Detector::generate`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseBatch<T: RealField + Copy> {
    pub sdr: Vec<T>,
    pub rotations: Vec<Angles<T>>,
    pub translations: Vec<Vector3<T>>,
}

impl<T: RealField + Copy> PoseBatch<T> {
    pub fn len(&self) -> usize { self.sdr.len() }
    pub fn is_empty(&self) -> bool { self.sdr.is_empty() }
}

impl<T: RealField + Copy> FromIterator<Pose<T>> for PoseBatch<T> {
    fn from_iter<I: IntoIterator<Item = Pose<T>>>(poses: I) -> Self {
        let mut batch = Self { sdr: vec![], rotations: vec![], translations: vec![] };
        for Pose { sdr, rotation, translation } in poses {
            batch.sdr         .push(sdr);
            batch.rotations   .push(rotation);
            batch.translations.push(translation);
        }
        batch
    }
}
