//! CPU rasterization using tiny-skia
//!
//! `PixmapContext` is a `DrawContext` that paints straight into an
//! anti-aliased RGBA pixmap. It is the reference backend for checking what
//! recorded commands actually look like.

use befair_core::{
    Color, CornerRadius, DrawContext, LineCap, LineJoin, Path, PathCommand, Point, Rect, Size,
    Stroke,
};
use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use crate::error::RasterError;

/// A draw context backed by a tiny-skia pixmap
pub struct PixmapContext {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl PixmapContext {
    /// Create a transparent pixmap of the given size
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;
        tracing::debug!("Created {}x{} pixmap context", width, height);
        Ok(Self {
            pixmap,
            anti_alias: true,
        })
    }

    /// Enable or disable anti-aliasing for subsequent draws
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    /// Finish drawing and take the pixels
    pub fn finish(self) -> RasterizedImage {
        RasterizedImage {
            pixels: unpremultiply_alpha(self.pixmap.data()),
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn fill_skia_path(&mut self, path: &tiny_skia::Path, color: Color) {
        let paint = self.paint(color);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

impl DrawContext for PixmapContext {
    fn fill_path(&mut self, path: &Path, color: Color) {
        match to_skia_path(path) {
            Some(skia_path) => self.fill_skia_path(&skia_path, color),
            None => tracing::warn!("Skipping fill of degenerate path: {:?}", path.bounds()),
        }
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        let Some(skia_path) = to_skia_path(path) else {
            tracing::warn!("Skipping stroke of degenerate path: {:?}", path.bounds());
            return;
        };
        let paint = self.paint(color);
        self.pixmap.stroke_path(
            &skia_path,
            &paint,
            &to_skia_stroke(stroke),
            Transform::identity(),
            None,
        );
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, color: Color) {
        self.fill_path(&Path::rounded_rect(rect, corner_radius), color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        match tiny_skia::PathBuilder::from_circle(center.x, center.y, radius) {
            Some(skia_path) => self.fill_skia_path(&skia_path, color),
            None => tracing::warn!("Skipping fill of degenerate circle: r={}", radius),
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, color: Color) {
        self.stroke_path(&Path::circle(center, radius), stroke, color);
    }

    fn viewport_size(&self) -> Size {
        Size::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }
}

/// Rasterized image data
pub struct RasterizedImage {
    /// RGBA pixel data (straight alpha)
    pub pixels: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl RasterizedImage {
    /// Get the pixel data as a slice
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read one pixel as straight-alpha RGBA
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Number of pixels with non-zero alpha
    pub fn coverage(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] > 0).count()
    }
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn to_skia_stroke(stroke: &Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width: stroke.width,
        miter_limit: stroke.miter_limit,
        line_cap: match stroke.cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        line_join: match stroke.join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        ..Default::default()
    }
}

/// Convert a BeFair path to a tiny-skia path
///
/// Returns `None` for empty or degenerate paths.
fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCommand::LineTo(p) => pb.line_to(p.x, p.y),
            PathCommand::QuadTo { control, end } => {
                pb.quad_to(control.x, control.y, end.x, end.y)
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => pb.cubic_to(
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ),
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Convert premultiplied alpha to straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = ((chunk[0] as f32 / a).round().min(255.0)) as u8;
            let g = ((chunk[1] as f32 / a).round().min(255.0)) as u8;
            let b = ((chunk[2] as f32 / a).round().min(255.0)) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_error() {
        assert!(matches!(
            PixmapContext::new(0, 24),
            Err(RasterError::InvalidDimensions { width: 0, height: 24 })
        ));
        assert!(PixmapContext::new(24, 0).is_err());
    }

    #[test]
    fn test_fill_rect_covers_pixels() {
        let mut ctx = PixmapContext::new(16, 16).unwrap().with_anti_alias(false);
        ctx.fill_rect(Rect::new(4.0, 4.0, 8.0, 8.0), CornerRadius::ZERO, Color::RED);

        let image = ctx.finish();
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.pixel(8, 8), Some([255, 0, 0, 255]));
        assert_eq!(image.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(image.coverage(), 64);
        assert_eq!(image.pixel(16, 0), None);
    }

    #[test]
    fn test_circle_and_stroke() {
        let mut ctx = PixmapContext::new(32, 32).unwrap();
        ctx.fill_circle(Point::new(16.0, 16.0), 8.0, Color::BLUE);
        ctx.stroke_path(
            &Path::new().move_to(0.0, 2.0).line_to(32.0, 2.0),
            &Stroke::new(2.0),
            Color::GREEN,
        );

        let image = ctx.finish();
        assert_eq!(image.pixel(16, 16), Some([0, 0, 255, 255]));
        assert_eq!(image.pixel(10, 2), Some([0, 255, 0, 255]));
        assert_eq!(image.pixel(2, 16), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_degenerate_path_is_skipped() {
        let mut ctx = PixmapContext::new(8, 8).unwrap();
        ctx.fill_path(&Path::new(), Color::BLACK);
        ctx.fill_circle(Point::new(4.0, 4.0), 0.0, Color::BLACK);
        assert_eq!(ctx.finish().coverage(), 0);
    }

    #[test]
    fn test_viewport_matches_pixmap() {
        let ctx = PixmapContext::new(4, 3).unwrap();
        assert_eq!(ctx.viewport_size(), Size::new(4.0, 3.0));
    }

    #[test]
    fn test_pixel_indexing_on_wide_image() {
        let mut pixels = vec![0; 5 * 2 * 4];
        pixels[(5 + 4) * 4..].copy_from_slice(&[1, 2, 3, 4]);
        let image = RasterizedImage {
            pixels,
            width: 5,
            height: 2,
        };

        assert_eq!(image.pixel(4, 1), Some([1, 2, 3, 4]));
        assert_eq!(image.pixel(3, 1), Some([0, 0, 0, 0]));
        assert_eq!(image.pixel(5, 1), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_unpremultiply() {
        let data = [128, 0, 0, 128, 0, 0, 0, 0];
        let straight = unpremultiply_alpha(&data);
        assert_eq!(straight, vec![255, 0, 0, 128, 0, 0, 0, 0]);
    }
}
