//! Rasterization error types

use thiserror::Error;

/// Errors that can occur when rasterizing draw commands
#[derive(Error, Debug)]
pub enum RasterError {
    /// The pixmap could not be allocated for the requested size
    #[error("Invalid pixmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
