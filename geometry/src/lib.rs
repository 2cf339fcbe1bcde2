//! Pose geometry of a virtual C-arm: rotations built from three angles, and the
//! source / detector-centre / detector-basis frame derived from them.

mod rotation;
mod basis;
mod error;

pub use rotation::{Angles, rx, ry, rz, rxyz, compose_rotations};
pub use basis::{DetectorFrame, BasisBatch, get_basis};
pub use error::ShapeMismatch;
