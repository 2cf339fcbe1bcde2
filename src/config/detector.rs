//! Configuration file parser for the detector

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};
use units::{mm_, Length};

use crate::error::{Error, Result};

/// TOML has no notion of units, so quantities such as `"0.05 mm"` are written
/// as strings and handed to the parsers provided by `uom`.
fn deserialize_uom<'d, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'d>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    String::deserialize(deserializer)?
        .parse::<T>()
        .map_err(de::Error::custom)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {

    /// Number of pixels along the detector's `u` axis
    pub height: usize,

    /// Number of pixels along the detector's `v` axis
    pub width: usize,

    /// Pixel spacing along `u`
    #[serde(deserialize_with = "deserialize_uom")]
    pub delx: Length,

    /// Pixel spacing along `v`
    #[serde(deserialize_with = "deserialize_uom")]
    pub dely: Length,

    /// Number of pixels to sample at random on each call. All pixels if absent.
    #[serde(default)]
    pub subsample: Option<usize>,
}

impl DetectorConfig {
    /// `(delx, dely)` in millimetres, the length unit of the geometry engine
    pub fn spacing_mm(&self) -> (f64, f64) { (mm_(self.delx), mm_(self.dely)) }
}

pub fn parse_config(text: &str) -> Result<DetectorConfig> {
    Ok(toml::from_str(text)?)
}

pub fn read_config_file(path: &Path) -> Result<DetectorConfig> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::ConfigRead { path: path.to_owned(), source })?;
    parse_config(&text)
}
