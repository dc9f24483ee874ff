//! Procedural icon geometry
//!
//! Every icon is described in normalized space, with x and y as fractions of
//! the surface width and height, and mapped to pixels at draw time. No
//! constant below is an absolute pixel value, so icons stay correct at any
//! surface size and display density.
//!
//! Geometry is rebuilt on every call. Nothing is cached between draws.

use befair_core::{DrawContext, Path, Point, Rect, Size};
use befair_paint::{Circle, RoundedRect};

use crate::error::IconError;
use crate::icon::IconKind;
use crate::primitive::{Primitive, Shape};
use crate::style::{PaintMode, PaintStyle, Surface};

/// Rounded-rect corner radius, as a fraction of surface width
const CORNER_RADIUS: f32 = 1.0 / 12.0;

mod arrow {
    /// Chevron arms start at this fraction of the width
    pub const HEAD_X: f32 = 0.6;
    pub const HEAD_TOP: f32 = 0.2;
    pub const HEAD_BOTTOM: f32 = 0.8;
}

mod email {
    pub const BODY_WIDTH: f32 = 0.75;
    pub const BODY_HEIGHT: f32 = 0.55;
    /// Depth of the flap's point, as a fraction of body height
    pub const FLAP_DEPTH: f32 = 0.5;
    /// Flap stroke relative to the style's stroke width
    pub const FLAP_STROKE: f32 = 0.75;
}

mod lock {
    pub const BODY_WIDTH: f32 = 0.6;
    pub const BODY_HEIGHT: f32 = 0.45;
    pub const BODY_TOP: f32 = 0.45;
    /// Shackle radius as a fraction of body width
    pub const SHACKLE_RADIUS: f32 = 0.35;
    /// Shackle height above the body, in shackle radii
    pub const SHACKLE_RISE: f32 = 1.5;
    /// Keyhole center below the body top, as a fraction of body height
    pub const KEYHOLE_Y: f32 = 0.4;
    /// Keyhole radius as a fraction of surface width
    pub const KEYHOLE_RADIUS: f32 = 1.0 / 16.0;
}

mod eye {
    pub const LEFT: f32 = 0.1;
    pub const RIGHT: f32 = 0.9;
    pub const UPPER_LID: f32 = 0.15;
    pub const LOWER_LID: f32 = 0.85;
    /// Pupil radius as a fraction of surface width
    pub const PUPIL_RADIUS: f32 = 0.18;
    /// Highlight radius as a fraction of surface width, always below the pupil
    pub const HIGHLIGHT_RADIUS: f32 = 0.08;
}

/// Maps normalized coordinates onto a validated surface
#[derive(Clone, Copy, Debug)]
struct Frame {
    w: f32,
    h: f32,
}

impl Frame {
    fn new(surface: Surface) -> Self {
        Self {
            w: surface.width,
            h: surface.height,
        }
    }

    fn x(&self, nx: f32) -> f32 {
        self.w * nx
    }

    fn y(&self, ny: f32) -> f32 {
        self.h * ny
    }

    fn point(&self, nx: f32, ny: f32) -> Point {
        Point::new(self.x(nx), self.y(ny))
    }

    fn center(&self) -> Point {
        self.point(0.5, 0.5)
    }

    /// Rect of the given normalized size, centered horizontally
    fn centered_rect(&self, nw: f32, nh: f32, top: f32) -> Rect {
        let width = self.x(nw);
        let height = self.y(nh);
        Rect::from_origin_size(
            Point::new((self.w - width) / 2.0, top),
            Size::new(width, height),
        )
    }
}

/// Compute the draw primitives for an icon
///
/// Inputs are validated before any geometry is built, so an error never comes
/// with partial output. Identical inputs always produce identical primitives.
/// Each part of an icon picks its own fill or stroke mode, so `style.mode`
/// does not affect the result.
pub fn render(
    icon: IconKind,
    surface: Surface,
    style: &PaintStyle,
) -> Result<Vec<Primitive>, IconError> {
    if let Err(err) = surface.validate().and_then(|()| style.validate()) {
        tracing::debug!("Rejected {} icon: {}", icon, err);
        return Err(err);
    }

    let frame = Frame::new(surface);
    let primitives = match icon {
        IconKind::ArrowRight => arrow_right(frame, style),
        IconKind::Email => email(frame, style),
        IconKind::Lock => lock(frame, style),
        IconKind::Eye => eye(frame, style),
    };

    tracing::trace!(
        "Rendered {} icon at {}x{}: {} primitives",
        icon,
        surface.width,
        surface.height,
        primitives.len()
    );
    Ok(primitives)
}

/// Render an icon and issue it against a draw context
///
/// Nothing is drawn when the inputs are rejected.
pub fn paint(
    ctx: &mut dyn DrawContext,
    icon: IconKind,
    surface: Surface,
    style: &PaintStyle,
) -> Result<(), IconError> {
    for primitive in render(icon, surface, style)? {
        primitive.draw(ctx);
    }
    Ok(())
}

/// Horizontal shaft with a chevron head meeting it at the right edge
fn arrow_right(f: Frame, style: &PaintStyle) -> Vec<Primitive> {
    let tip = f.point(1.0, 0.5);
    let path = Path::new()
        .move_to(f.x(0.0), f.y(0.5))
        .line_to(tip.x, tip.y)
        .move_to(f.x(arrow::HEAD_X), f.y(arrow::HEAD_TOP))
        .line_to(tip.x, tip.y)
        .line_to(f.x(arrow::HEAD_X), f.y(arrow::HEAD_BOTTOM));

    vec![Primitive::Path {
        path,
        style: style.with_mode(PaintMode::Stroke),
    }]
}

/// Filled envelope body with an open V flap in the contrast color
fn email(f: Frame, style: &PaintStyle) -> Vec<Primitive> {
    let body_height = f.y(email::BODY_HEIGHT);
    let body = f.centered_rect(email::BODY_WIDTH, email::BODY_HEIGHT, (f.h - body_height) / 2.0);

    let flap = Path::new()
        .move_to(body.x(), body.y())
        .line_to(
            body.x() + body.width() / 2.0,
            body.y() + body.height() * email::FLAP_DEPTH,
        )
        .line_to(body.right(), body.y());

    vec![
        Primitive::Shape {
            shape: Shape::RoundRect(RoundedRect::uniform(body, f.x(CORNER_RADIUS))),
            style: style.with_mode(PaintMode::Fill),
        },
        Primitive::Path {
            path: flap,
            style: style
                .contrasting()
                .with_stroke_width(style.stroke_width * email::FLAP_STROKE)
                .with_mode(PaintMode::Stroke),
        },
    ]
}

/// Filled body, cubic shackle above it, and a keyhole dot
fn lock(f: Frame, style: &PaintStyle) -> Vec<Primitive> {
    let body = f.centered_rect(lock::BODY_WIDTH, lock::BODY_HEIGHT, f.y(lock::BODY_TOP));

    let radius = body.width() * lock::SHACKLE_RADIUS;
    let cx = f.x(0.5);
    let base = body.y();
    // Wide surfaces would push the control points above the top edge
    let rise = (radius * lock::SHACKLE_RISE).min(base);
    let shackle = Path::new().move_to(cx - radius, base).cubic_to(
        cx - radius,
        base - rise,
        cx + radius,
        base - rise,
        cx + radius,
        base,
    );

    let keyhole = Circle::new(
        Point::new(cx, base + body.height() * lock::KEYHOLE_Y),
        f.x(lock::KEYHOLE_RADIUS),
    );

    vec![
        Primitive::Shape {
            shape: Shape::RoundRect(RoundedRect::uniform(body, f.x(CORNER_RADIUS))),
            style: style.with_mode(PaintMode::Fill),
        },
        Primitive::Path {
            path: shackle,
            style: style.with_mode(PaintMode::Stroke),
        },
        Primitive::Shape {
            shape: Shape::Circle(keyhole),
            style: style.contrasting().with_mode(PaintMode::Fill),
        },
    ]
}

/// Stroked lens outline, filled pupil, and a highlight in the contrast color
fn eye(f: Frame, style: &PaintStyle) -> Vec<Primitive> {
    let center = f.center();
    let lens = Path::new()
        .move_to(f.x(eye::LEFT), center.y)
        .quad_to(center.x, f.y(eye::UPPER_LID), f.x(eye::RIGHT), center.y)
        .quad_to(center.x, f.y(eye::LOWER_LID), f.x(eye::LEFT), center.y)
        .close();

    vec![
        Primitive::Path {
            path: lens,
            style: style.with_mode(PaintMode::Stroke),
        },
        Primitive::Shape {
            shape: Shape::Circle(Circle::new(center, f.x(eye::PUPIL_RADIUS))),
            style: style.with_mode(PaintMode::Fill),
        },
        Primitive::Shape {
            shape: Shape::Circle(Circle::new(center, f.x(eye::HIGHLIGHT_RADIUS))),
            style: style.contrasting().with_mode(PaintMode::Fill),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use befair_core::{Color, PathCommand, RecordingContext};

    const EPS: f32 = 1e-4;

    fn assert_point(actual: Point, x: f32, y: f32) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    fn style() -> PaintStyle {
        PaintStyle::stroke(Color::BLACK, 2.0)
    }

    #[test]
    fn test_arrow_right_geometry() {
        let prims = render(IconKind::ArrowRight, Surface::square(16.0), &style()).unwrap();
        assert_eq!(prims.len(), 1);

        let Primitive::Path { path, style } = &prims[0] else {
            panic!("arrow should be a single path");
        };
        assert_eq!(style.mode, PaintMode::Stroke);

        let cmds = path.commands();
        assert_eq!(cmds.len(), 5);
        assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
        assert!(matches!(cmds[2], PathCommand::MoveTo(_)));

        let pts: Vec<Point> = path.points().collect();
        assert_point(pts[0], 0.0, 8.0);
        assert_point(pts[1], 16.0, 8.0);
        assert_point(pts[2], 9.6, 3.2);
        assert_point(pts[3], 16.0, 8.0);
        assert_point(pts[4], 9.6, 12.8);
    }

    #[test]
    fn test_email_geometry() {
        let style = style();
        let prims = render(IconKind::Email, Surface::square(100.0), &style).unwrap();
        assert_eq!(prims.len(), 2);

        let Primitive::Shape {
            shape: Shape::RoundRect(body),
            style: body_style,
        } = &prims[0]
        else {
            panic!("email body should be a rounded rect");
        };
        assert_point(body.rect.origin, 12.5, 22.5);
        assert!((body.rect.width() - 75.0).abs() < EPS);
        assert!((body.rect.height() - 55.0).abs() < EPS);
        assert_eq!(body_style.mode, PaintMode::Fill);
        assert_eq!(body_style.color, Color::BLACK);

        let Primitive::Path {
            path,
            style: flap_style,
        } = &prims[1]
        else {
            panic!("email flap should be a path");
        };
        let pts: Vec<Point> = path.points().collect();
        assert_eq!(pts.len(), 3);
        assert_point(pts[0], 12.5, 22.5);
        assert_point(pts[1], 50.0, 50.0);
        assert_point(pts[2], 87.5, 22.5);
        assert_eq!(flap_style.color, style.contrast);
        assert_eq!(flap_style.mode, PaintMode::Stroke);
        assert!((flap_style.stroke_width - 1.5).abs() < EPS);
        assert!(!matches!(path.commands().last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_lock_geometry() {
        let prims = render(IconKind::Lock, Surface::square(24.0), &style()).unwrap();
        assert_eq!(prims.len(), 3);

        let Primitive::Shape {
            shape: Shape::RoundRect(body),
            ..
        } = &prims[0]
        else {
            panic!("lock body should be a rounded rect");
        };
        assert_point(body.rect.origin, 4.8, 10.8);
        assert!((body.rect.width() - 14.4).abs() < EPS);
        assert!((body.rect.height() - 10.8).abs() < EPS);
        assert!((body.corner_radius.top_left - 2.0).abs() < EPS);

        let Primitive::Path { path, style } = &prims[1] else {
            panic!("shackle should be a path");
        };
        assert_eq!(style.mode, PaintMode::Stroke);
        let radius = 14.4 * 0.35;
        let rise = radius * 1.5;
        match path.commands() {
            [PathCommand::MoveTo(start), PathCommand::CubicTo {
                control1,
                control2,
                end,
            }] => {
                assert_point(*start, 12.0 - radius, 10.8);
                assert_point(*control1, 12.0 - radius, 10.8 - rise);
                assert_point(*control2, 12.0 + radius, 10.8 - rise);
                assert_point(*end, 12.0 + radius, 10.8);
            }
            other => panic!("unexpected shackle path: {other:?}"),
        }

        let Primitive::Shape {
            shape: Shape::Circle(keyhole),
            style: keyhole_style,
        } = &prims[2]
        else {
            panic!("keyhole should be a circle");
        };
        assert_point(keyhole.center, 12.0, 10.8 + 10.8 * 0.4);
        assert!((keyhole.radius - 1.5).abs() < EPS);
        assert_eq!(keyhole_style.color, Color::WHITE);
        assert!(body.rect.contains(keyhole.center));
    }

    #[test]
    fn test_lock_shackle_stays_on_wide_surface() {
        let prims = render(IconKind::Lock, Surface::new(100.0, 10.0), &style()).unwrap();
        let Primitive::Path { path, .. } = &prims[1] else {
            panic!("shackle should be a path");
        };
        assert!(path.bounds().y() >= 0.0);
    }

    #[test]
    fn test_eye_geometry() {
        let prims = render(IconKind::Eye, Surface::square(24.0), &style()).unwrap();
        assert_eq!(prims.len(), 3);

        let Primitive::Path { path, .. } = &prims[0] else {
            panic!("lens should be a path");
        };
        match path.commands() {
            [PathCommand::MoveTo(start), PathCommand::QuadTo {
                control: upper,
                end: right,
            }, PathCommand::QuadTo {
                control: lower,
                end: back,
            }, PathCommand::Close] => {
                assert_point(*start, 2.4, 12.0);
                assert_point(*upper, 12.0, 3.6);
                assert_point(*right, 21.6, 12.0);
                assert_point(*lower, 12.0, 20.4);
                assert_point(*back, 2.4, 12.0);
            }
            other => panic!("unexpected lens path: {other:?}"),
        }

        let radii: Vec<f32> = prims[1..]
            .iter()
            .map(|p| match p {
                Primitive::Shape {
                    shape: Shape::Circle(c),
                    ..
                } => c.radius,
                other => panic!("expected circle, got {other:?}"),
            })
            .collect();
        assert!((radii[0] - 24.0 * 0.18).abs() < EPS);
        assert!((radii[1] - 24.0 * 0.08).abs() < EPS);
        assert_eq!(prims[2].style().color, Color::WHITE);
        assert_eq!(prims[1].style().mode, PaintMode::Fill);
    }

    #[test]
    fn test_input_mode_does_not_change_output() {
        let surface = Surface::square(24.0);
        for icon in IconKind::ALL {
            let stroked = render(icon, surface, &style()).unwrap();
            let filled = render(icon, surface, &style().with_mode(PaintMode::Fill)).unwrap();
            assert_eq!(stroked, filled, "{icon} depends on the input mode");
        }
    }

    #[test]
    fn test_rejects_degenerate_surface() {
        for surface in [Surface::new(0.0, 24.0), Surface::new(24.0, 0.0)] {
            for icon in IconKind::ALL {
                let err = render(icon, surface, &style()).unwrap_err();
                assert!(matches!(err, IconError::InvalidGeometry { .. }));
            }
        }
    }

    #[test]
    fn test_rejects_negative_stroke() {
        let style = style().with_stroke_width(-1.0);
        let err = render(IconKind::Eye, Surface::square(24.0), &style).unwrap_err();
        assert!(matches!(err, IconError::InvalidStyle { stroke_width } if stroke_width == -1.0));
    }

    #[test]
    fn test_geometry_checked_before_style() {
        let style = style().with_stroke_width(-1.0);
        let err = render(IconKind::Lock, Surface::new(-5.0, 24.0), &style).unwrap_err();
        assert!(matches!(err, IconError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_paint_records_nothing_on_error() {
        let mut ctx = RecordingContext::new(Size::new(24.0, 24.0));
        assert!(paint(&mut ctx, IconKind::Email, Surface::new(0.0, 0.0), &style()).is_err());
        assert!(ctx.commands().is_empty());

        paint(&mut ctx, IconKind::Email, Surface::square(24.0), &style()).unwrap();
        assert_eq!(ctx.commands().len(), 2);
    }
}
