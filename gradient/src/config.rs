use serde::Deserialize;

use crate::error::ConfigError;
use crate::gradient::{Corners, GradientParams};

/// Gradient parameters as read from a TOML file.
///
/// ```toml
/// width = 32
/// height = 32
/// top_left = 0xf800
/// top_right = 0x07e0
/// bottom_left = 0x001f
/// bottom_right = 0xffff
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientConfig {
    pub width: u16,
    pub height: u16,
    pub top_left: u16,
    pub top_right: u16,
    pub bottom_left: u16,
    pub bottom_right: u16,
}

impl GradientConfig {
    pub fn from_toml(toml_str: &str) -> Result<GradientConfig, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn corners(&self) -> Corners {
        Corners {
            top_left: self.top_left,
            top_right: self.top_right,
            bottom_left: self.bottom_left,
            bottom_right: self.bottom_right,
        }
    }

    /// Validate into generation parameters.
    pub fn params(&self) -> Result<GradientParams, ConfigError> {
        Ok(GradientParams::new(self.width, self.height, self.corners())?)
    }
}
