//! Pixel coordinates on the detector plane.
//!
//! The grid depends only on the detector's pixel counts and spacings, never on
//! the pose, so it is built once per detector and reused for every batch.

use itertools::iproduct;
use nalgebra::RealField;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::index::{index2_to_1, Index1_u};

/// Coefficients `[t, s]` of one pixel along the detector basis `(u, v)`, in
/// physical length units
pub type Coef<T> = [T; 2];

#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid<T: RealField + Copy> {
    pub height: usize,
    pub width: usize,
    pub delx: T,
    pub dely: T,
    coefs: Vec<Coef<T>>,
}

impl<T: RealField + Copy> PixelGrid<T> {

    /// `height` pixels spaced `delx` apart along `u`, by `width` pixels spaced
    /// `dely` apart along `v`. Pixel `row * width + col` has coefficients
    /// `[t_row, s_col]`.
    pub fn new(height: usize, width: usize, delx: T, dely: T) -> Result<Self> {
        if height == 0 { return Err(Error::invalid_dimension("height", height)); }
        if width  == 0 { return Err(Error::invalid_dimension("width" , width )); }
        check_spacing("delx", delx)?;
        check_spacing("dely", dely)?;
        let coefs = iproduct!(axis(height, delx), axis(width, dely))
            .map(|(t, s)| [t, s])
            .collect();
        Ok(Self { height, width, delx, dely, coefs })
    }

    /// Number of pixels: always `height * width`
    pub fn len(&self) -> usize { self.coefs.len() }
    pub fn is_empty(&self) -> bool { self.coefs.is_empty() }

    pub fn coefs(&self) -> &[Coef<T>] { &self.coefs }
    pub fn iter(&self) -> std::slice::Iter<Coef<T>> { self.coefs.iter() }

    /// 1-D index of the pixel in `row`, `col`
    pub fn pixel_index(&self, row: usize, col: usize) -> Index1_u { index2_to_1([row, col], self.width) }

    /// The grid as an `(N, 2)` array of `[t, s]` rows
    pub fn to_array(&self) -> Array2<T> {
        Array2::from_shape_fn((self.len(), 2), |(i, k)| self.coefs[i][k])
    }
}

impl<T: RealField + Copy> std::ops::Index<Index1_u> for PixelGrid<T> {
    type Output = Coef<T>;
    #[inline]
    fn index(&self, i: Index1_u) -> &Self::Output { &self.coefs[i] }
}

/// Pixel positions along one detector axis of `n` pixels.
///
/// Integers from `floor(-n/2)` up to (excluding) `floor(n/2)`, shifted by half a
/// pixel when `n` is even and a whole pixel when it is odd, then scaled by
/// `spacing`. This gives exactly `n` values, symmetric about zero.
pub fn axis<T: RealField + Copy>(n: usize, spacing: T) -> impl Iterator<Item = T> + Clone {
    let n = n as i64;
    let offset = if n % 2 == 0 { 0.5 } else { 1.0 };
    ((-n).div_euclid(2) .. n.div_euclid(2))
        .map(move |i| nalgebra::convert::<f64, T>(i as f64 + offset) * spacing)
}

fn check_spacing<T: RealField + Copy>(argument: &'static str, spacing: T) -> Result<()> {
    if spacing > T::zero() && spacing.is_finite() { Ok(()) }
    else { Err(Error::invalid_dimension(argument, spacing)) }
}
