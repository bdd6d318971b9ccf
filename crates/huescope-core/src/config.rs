//! Scope configuration.

use std::path::Path;

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::error::ScopeError;

/// Default side length of the square scope surface.
pub const DEFAULT_SIZE: u32 = 256;
/// Side length the graticule label offsets are calibrated for.
pub const REFERENCE_SIZE: u32 = 256;
/// Light blue at roughly half opacity.
const DEFAULT_POINT_COLOR: [u8; 4] = [173, 216, 230, 128];

/// Tunables for a vectorscope instance. Fixed for the lifetime of a
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Side length of the square scope surface in pixels.
    pub size: u32,
    /// Plot every n-th pixel of the captured frame (row-major order).
    ///
    /// `1` plots every pixel. Larger values make ticks cheaper on big
    /// frames but thin out the trace, so the scope looks dimmer.
    pub sample_stride: u32,
    /// Straight (non-premultiplied) RGBA colour of one plotted sample.
    /// Overlapping samples composite on top of each other, so density
    /// shows up as brightness.
    pub point_color: [u8; 4],
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            sample_stride: 1,
            point_color: DEFAULT_POINT_COLOR,
        }
    }
}

impl ScopeConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ScopeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ScopeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ScopeError> {
        if self.size == 0 {
            return Err(ScopeError::InvalidConfig("size must be positive".into()));
        }
        if self.sample_stride == 0 {
            return Err(ScopeError::InvalidConfig(
                "sample_stride must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The point colour as a palette colour.
    pub fn point_srgba(&self) -> Srgba<u8> {
        let [r, g, b, a] = self.point_color;
        Srgba::new(r, g, b, a)
    }
}
