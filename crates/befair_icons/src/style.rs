//! Render surface and paint style

use befair_core::{Color, Stroke};

use crate::error::IconError;

/// The pixel area one icon is drawn into
///
/// Supplied fresh on every draw; layout may hand out a zero-sized surface
/// during its first pass, which `render` rejects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square surface, the common case for icons
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Check that both dimensions are positive and finite
    pub fn validate(&self) -> Result<(), IconError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(IconError::InvalidGeometry {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Whether a shape is filled or outlined
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    #[default]
    Stroke,
}

/// Colors and stroke settings for one draw
///
/// `color` paints the icon silhouette. `contrast` is the background contrast
/// color used for cut-outs drawn on top of it (envelope flap, keyhole, eye
/// highlight).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    pub color: Color,
    pub contrast: Color,
    /// Stroke width in pixels
    pub stroke_width: f32,
    /// Fill or stroke when drawing a `Primitive`
    ///
    /// Icons decide this per part and ignore the caller's value: `render`
    /// always returns primitives whose mode is already resolved.
    pub mode: PaintMode,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            contrast: Color::WHITE,
            stroke_width: 2.0,
            mode: PaintMode::Stroke,
        }
    }
}

impl PaintStyle {
    /// Stroke style with the given color and width
    pub fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            ..Default::default()
        }
    }

    /// Fill style with the given color
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            mode: PaintMode::Fill,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_contrast(mut self, contrast: Color) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_mode(mut self, mode: PaintMode) -> Self {
        self.mode = mode;
        self
    }

    /// Same style painted in the contrast color
    pub fn contrasting(self) -> Self {
        self.with_color(self.contrast)
    }

    /// Check that the stroke width is non-negative and finite
    pub fn validate(&self) -> Result<(), IconError> {
        if self.stroke_width.is_finite() && self.stroke_width >= 0.0 {
            Ok(())
        } else {
            Err(IconError::InvalidStyle {
                stroke_width: self.stroke_width,
            })
        }
    }

    /// Backend stroke for this style
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width)
    }
}
