use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::qibla::Coordinate;

pub const DEFAULT_CONFIG_FILE: &str = "point-me.toml";

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub observer: ObserverConfig,
    pub compass: CompassConfig,
}

/// Where the user stands, used when no coordinates are given.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// in metres
    pub altitude: f32,
}

impl ObserverConfig {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CompassConfig {
    /// Report bearings against magnetic rather than true north.
    pub magnetic: bool,
    pub rose_id: String,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            magnetic: false,
            rose_id: "compass".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        toml_edit::de::from_str(source).context("invalid configuration")
    }

    /// Load `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("parsing {}", path.display()))
    }
}
