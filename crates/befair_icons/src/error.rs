//! Icon error types

use std::io;
use thiserror::Error;

/// Errors that can occur when rendering icons or loading icon styles
#[derive(Error, Debug)]
pub enum IconError {
    /// Surface width or height is zero, negative, or not finite
    #[error("Invalid surface geometry: {width}x{height} (dimensions must be positive and finite)")]
    InvalidGeometry { width: f32, height: f32 },

    /// Stroke width is negative or not finite
    #[error("Invalid paint style: stroke width {stroke_width} (must be non-negative and finite)")]
    InvalidStyle { stroke_width: f32 },

    /// IO error when reading a style file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Style configuration could not be parsed
    #[error("Icon style config error: {0}")]
    Config(String),
}
