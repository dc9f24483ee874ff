//! Icon style configuration
//!
//! Styles can be kept in a small TOML file next to the app's other assets:
//!
//! ```toml
//! color = "#49454FB3"
//! contrast = "#FFFFFF"
//! stroke_width_dp = 2.0
//! density = 2.75
//! ```
//!
//! Stroke widths are given in density-independent units and converted to
//! pixels with `density` when the style is resolved.

use std::fs;
use std::path::Path;

use befair_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::IconError;
use crate::style::{PaintMode, PaintStyle};

/// Serializable icon style
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IconStyleConfig {
    /// Icon color as `#RRGGBB` or `#RRGGBBAA`
    #[serde(default = "default_color")]
    pub color: String,
    /// Background contrast color as `#RRGGBB` or `#RRGGBBAA`
    #[serde(default = "default_contrast")]
    pub contrast: String,
    /// Stroke width in density-independent units
    #[serde(default = "default_stroke_width_dp")]
    pub stroke_width_dp: f32,
    /// Pixels per density-independent unit
    #[serde(default = "default_density")]
    pub density: f32,
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_contrast() -> String {
    "#FFFFFF".to_string()
}

fn default_stroke_width_dp() -> f32 {
    2.0
}

fn default_density() -> f32 {
    1.0
}

impl Default for IconStyleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            contrast: default_contrast(),
            stroke_width_dp: default_stroke_width_dp(),
            density: default_density(),
        }
    }
}

impl IconStyleConfig {
    /// Parse a style from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, IconError> {
        toml::from_str(content).map_err(|e| IconError::Config(e.to_string()))
    }

    /// Load a style from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded icon style from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String, IconError> {
        toml::to_string_pretty(self).map_err(|e| IconError::Config(e.to_string()))
    }

    /// Resolve into a paint style with the stroke width in pixels
    pub fn to_paint_style(&self) -> Result<PaintStyle, IconError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(IconError::Config(format!(
                "density must be positive, got {}",
                self.density
            )));
        }

        let style = PaintStyle {
            color: parse_hex_color(&self.color)?,
            contrast: parse_hex_color(&self.contrast)?,
            stroke_width: self.stroke_width_dp * self.density,
            mode: PaintMode::Stroke,
        };
        style.validate()?;
        Ok(style)
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Result<Color, IconError> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || IconError::Config(format!("invalid color: {s:?}"));

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    match hex.len() {
        6 => Ok(Color::from_hex(value)),
        8 => Ok(Color::from_hex_rgba(value)),
        _ => Err(invalid()),
    }
}
