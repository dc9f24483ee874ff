//! BeFair procedural icons
//!
//! The small set of hand-drawn vector icons used by BeFair buttons and input
//! fields: a right arrow, an email envelope, a lock and an eye.
//!
//! Icons are pure functions of `(icon, surface, style)`. Geometry is defined
//! as fractions of the surface and scaled to pixels on every call, and the
//! result is a list of [`Primitive`]s that any [`DrawContext`] can consume.
//!
//! # Example
//!
//! ```
//! use befair_icons::{render, IconKind, PaintStyle, Surface};
//! use befair_core::Color;
//!
//! let style = PaintStyle::stroke(Color::BLACK, 2.0);
//! let primitives = render(IconKind::Email, Surface::square(24.0), &style).unwrap();
//! assert_eq!(primitives.len(), 2);
//!
//! // Degenerate surfaces are rejected instead of producing NaN geometry
//! assert!(render(IconKind::Email, Surface::new(0.0, 24.0), &style).is_err());
//! ```
//!
//! Rendering straight into a backend:
//!
//! ```
//! use befair_icons::{paint, IconKind, PaintStyle, Surface};
//! use befair_paint::PixmapContext;
//!
//! let mut pixmap = PixmapContext::new(24, 24).unwrap();
//! paint(&mut pixmap, IconKind::Eye, Surface::square(24.0), &PaintStyle::default()).unwrap();
//! ```
//!
//! [`DrawContext`]: befair_core::DrawContext

pub mod config;
mod error;
mod icon;
mod primitive;
mod render;
mod style;

pub use config::IconStyleConfig;
pub use error::IconError;
pub use icon::IconKind;
pub use primitive::{Primitive, Shape};
pub use render::{paint, render};
pub use style::{PaintMode, PaintStyle, Surface};
