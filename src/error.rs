use std::path::PathBuf;

use thiserror::Error;

pub use geometry::ShapeMismatch;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),

    #[error("invalid detector dimension: `{argument}` must be positive, got {value}")]
    InvalidDimension { argument: &'static str, value: String },

    #[error("cannot subsample {requested} pixels from a detector with {available} pixels")]
    InvalidSubsample { requested: usize, available: usize },

    #[error("couldn't read config file `{}`: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("couldn't parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_dimension(argument: &'static str, value: impl std::fmt::Debug) -> Self {
        Self::InvalidDimension { argument, value: format!("{value:?}") }
    }
}
