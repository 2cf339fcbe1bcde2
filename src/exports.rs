pub use crate::detector::Detector;
pub use crate::error::{Error, Result, ShapeMismatch};
pub use crate::grid::{Coef, PixelGrid};
pub use crate::pose::{Pose, PoseBatch};
pub use crate::rays::RaySet;
pub use crate::subsample::{NoLog, SubsampleLog};
pub use crate::config::detector::{DetectorConfig, read_config_file};

pub use geometry::{Angles, DetectorFrame, BasisBatch};
pub use crate::index::{Index1_u, Index2_u};
