//! Composition of C-arm rotations from (theta, phi, gamma).
//!
//! Elementary rotations follow the right-handed convention and are composed as
//! `R = Rz(theta) · Ry(phi) · Rx(gamma)`: the rotation about X is applied to a
//! vector first, the one about the principal (Z) axis last.
//!
//! Everything here is a composition of `sin`, `cos` and matrix products on the
//! scalar type `T`, so it can be evaluated with any differentiable `RealField`.

use nalgebra::{Matrix3, RealField};

/// Rotation angles of a single exam, in radians: `[theta, phi, gamma]`, about
/// the Z, Y and X axes respectively.
pub type Angles<T> = [T; 3];

/// Rotation by `theta` about the Z axis
pub fn rz<T: RealField + Copy>(theta: T) -> Matrix3<T> {
    let (s, c) = theta.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(c, -s, o,
                 s,  c, o,
                 o,  o, l)
}

/// Rotation by `phi` about the Y axis
pub fn ry<T: RealField + Copy>(phi: T) -> Matrix3<T> {
    let (s, c) = phi.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new( c, o, s,
                  o, l, o,
                 -s, o, c)
}

/// Rotation by `gamma` about the X axis
pub fn rx<T: RealField + Copy>(gamma: T) -> Matrix3<T> {
    let (s, c) = gamma.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new(l, o,  o,
                 o, c, -s,
                 o, s,  c)
}

/// The full C-arm rotation `Rz(theta) · Ry(phi) · Rx(gamma)`
pub fn rxyz<T: RealField + Copy>([theta, phi, gamma]: Angles<T>) -> Matrix3<T> {
    rz(theta) * ry(phi) * rx(gamma)
}

/// One rotation matrix per exam.
pub fn compose_rotations<T: RealField + Copy>(angles: &[Angles<T>]) -> Vec<Matrix3<T>> {
    angles.iter().copied().map(rxyz).collect()
}
