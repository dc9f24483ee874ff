//! Draw primitives produced by the icon renderer

use befair_core::{DrawContext, Path, Point, Rect};
use befair_paint::{Circle, RoundedRect};

use crate::style::{PaintMode, PaintStyle};

/// A closed shape drawn without a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    RoundRect(RoundedRect),
}

impl Shape {
    /// Anchor points of the shape: the circle center, or the rect corners
    pub fn points(&self) -> Vec<Point> {
        match self {
            Shape::Circle(circle) => vec![circle.center],
            Shape::RoundRect(rr) => vec![
                rr.rect.origin,
                Point::new(rr.rect.right(), rr.rect.bottom()),
            ],
        }
    }

    /// Area covered by the shape
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(circle) => circle.bounds(),
            Shape::RoundRect(rr) => rr.rect,
        }
    }
}

/// One atomic drawing instruction with its resolved style
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Path { path: Path, style: PaintStyle },
    Shape { shape: Shape, style: PaintStyle },
}

impl Primitive {
    pub fn style(&self) -> &PaintStyle {
        match self {
            Primitive::Path { style, .. } | Primitive::Shape { style, .. } => style,
        }
    }

    /// Every point-valued coordinate, control points included
    pub fn points(&self) -> Vec<Point> {
        match self {
            Primitive::Path { path, .. } => path.points().collect(),
            Primitive::Shape { shape, .. } => shape.points(),
        }
    }

    /// Conservative bounds, not counting stroke width
    pub fn bounds(&self) -> Rect {
        match self {
            Primitive::Path { path, .. } => path.bounds(),
            Primitive::Shape { shape, .. } => shape.bounds(),
        }
    }

    /// Issue this primitive against a draw context
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        match self {
            Primitive::Path { path, style } => match style.mode {
                PaintMode::Fill => ctx.fill_path(path, style.color),
                PaintMode::Stroke => ctx.stroke_path(path, &style.to_stroke(), style.color),
            },
            Primitive::Shape { shape, style } => match (shape, style.mode) {
                (Shape::Circle(circle), PaintMode::Fill) => circle.fill(ctx, style.color),
                (Shape::Circle(circle), PaintMode::Stroke) => {
                    circle.stroke(ctx, &style.to_stroke(), style.color)
                }
                (Shape::RoundRect(rr), PaintMode::Fill) => rr.fill(ctx, style.color),
                (Shape::RoundRect(rr), PaintMode::Stroke) => {
                    rr.stroke(ctx, &style.to_stroke(), style.color)
                }
            },
        }
    }
}
