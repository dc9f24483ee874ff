//! Shape primitives that draw themselves into any `DrawContext`

use befair_core::{Color, CornerRadius, DrawContext, Path, Point, Rect, Size, Stroke};

/// A circle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_center(
            self.center,
            Size::new(self.radius * 2.0, self.radius * 2.0),
        )
    }

    pub fn fill(&self, ctx: &mut dyn DrawContext, color: Color) {
        ctx.fill_circle(self.center, self.radius, color);
    }

    pub fn stroke(&self, ctx: &mut dyn DrawContext, stroke: &Stroke, color: Color) {
        ctx.stroke_circle(self.center, self.radius, stroke, color);
    }
}

/// A rounded rectangle (convenience type combining Rect + CornerRadius)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundedRect {
    /// Same radius on every corner
    pub fn uniform(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            corner_radius: CornerRadius::uniform(radius),
        }
    }

    pub fn to_path(&self) -> Path {
        Path::rounded_rect(self.rect, self.corner_radius)
    }

    pub fn fill(&self, ctx: &mut dyn DrawContext, color: Color) {
        ctx.fill_rect(self.rect, self.corner_radius, color);
    }

    pub fn stroke(&self, ctx: &mut dyn DrawContext, stroke: &Stroke, color: Color) {
        ctx.stroke_path(&self.to_path(), stroke, color);
    }
}
