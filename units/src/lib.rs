//! Physical quantities used to describe the detector.
//!
//! The geometry engine itself works on bare scalars (in millimetres and
//! radians) so that it can be driven by any `RealField` type; `uom` quantities
//! are used at the edges, where users write values such as `"0.05 mm"` in
//! configuration files or on the command line.

pub use uom;
pub use uom::si::Quantity;
pub use uom::si::f64::{Angle, Length};

mod units {
  pub use uom::si::{length::{micrometer, millimeter, centimeter, meter},
                    angle ::{radian, degree},
  };
}
pub use crate::units::{micrometer, millimeter, centimeter, meter, radian, degree};

// Making values from float literals seems to be very long-winded, so provide
// some pithily-named convenience constructors.

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f64) -> $quantity { $quantity::new::<units::$unit>(x) }
  };
}

wrap!(um     Length micrometer);
wrap!(mm     Length millimeter);
wrap!(cm     Length centimeter);
wrap!(m      Length      meter);
wrap!(rad    Angle      radian);
wrap!(deg    Angle      degree);

// Reverse direction of the above: the bare number the geometry engine sees.
pub fn mm_ (x: Length) -> f64 { x.get::<units::millimeter>() }
pub fn rad_(x: Angle ) -> f64 { x.get::<units::radian>() }

#[macro_export]
macro_rules! assert_uom_eq {
  ($unit:ident, $lhs:expr, $rhs:expr, $algo:ident <= $tol:expr) => {
    float_eq::assert_float_eq!($lhs.get::<$unit>(), $rhs.get::<$unit>(), $algo <= $tol)
  };
}
