//! BeFair Paint
//!
//! Shape primitives and a CPU rasterizer for BeFair drawing commands.
//! All core types are unified with befair_core, so a shape drawn here can be
//! recorded and replayed into any other `DrawContext`.
//!
//! # Features
//!
//! - Shape primitives (circle, rounded rect) that draw into any sink
//! - CPU rasterization to RGBA pixels via tiny-skia
//!
//! # Example
//!
//! ```
//! use befair_paint::{Circle, Color, PixmapContext, Point, Rect, RoundedRect};
//!
//! let mut pixmap = PixmapContext::new(24, 24).unwrap();
//! RoundedRect::uniform(Rect::new(3.0, 5.0, 18.0, 13.0), 2.0).fill(&mut pixmap, Color::BLACK);
//! Circle::new(Point::new(12.0, 12.0), 4.0).fill(&mut pixmap, Color::WHITE);
//!
//! let image = pixmap.finish();
//! assert_eq!(image.pixel(12, 12), Some([255, 255, 255, 255]));
//! ```

pub mod error;
pub mod primitives;
pub mod raster;

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from befair_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use befair_core::{
    Color, CornerRadius, DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand, Point,
    Rect, Size, Stroke,
};

// ─────────────────────────────────────────────────────────────────────────────
// befair_paint specific exports
// ─────────────────────────────────────────────────────────────────────────────

pub use error::RasterError;
pub use primitives::{Circle, RoundedRect};
pub use raster::{PixmapContext, RasterizedImage};
