//! Ray geometry of a virtual C-arm, for rendering digitally reconstructed
//! radiographs.
//!
//! A [`Detector`] turns batches of poses (source-to-detector radius, three
//! rotation angles, three translations) into X-ray source points and one target
//! point per detector pixel, or per randomly subsampled pixel.

mod exports;
pub use exports::*;

pub mod config;
pub mod detector;
pub mod error;
pub mod grid;
pub mod index;
pub mod pose;
pub mod rays;
pub mod subsample;
pub mod utils;
