//! BeFair Core
//!
//! Foundational drawing types shared by every BeFair rendering crate:
//!
//! - **Geometry**: points, sizes, rectangles and corner radii
//! - **Color**: straight-alpha RGBA in `0.0..=1.0`
//! - **Paths**: move/line/quad/cubic vector paths
//! - **Draw Context**: the sink trait that fills and strokes are issued against,
//!   plus a recording implementation for deferred replay
//!
//! # Example
//!
//! ```rust
//! use befair_core::{Color, DrawContext, Path, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(16.0, 16.0));
//! let shaft = Path::new().move_to(0.0, 8.0).line_to(16.0, 8.0);
//! ctx.stroke_path(&shaft, &Stroke::new(2.0), Color::BLACK);
//!
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod draw;
pub mod geometry;

pub use draw::{
    DrawCommand, DrawContext, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, Stroke,
};
pub use geometry::{Color, CornerRadius, Point, Rect, Size};
