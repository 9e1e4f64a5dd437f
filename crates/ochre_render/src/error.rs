//! Error types for the render kernel.

use thiserror::Error;

/// Errors reported by context creation and scene construction.
///
/// Precondition violations inside the render loop itself (taking from an
/// empty tile queue, out-of-bounds pixel reads) are programming errors and
/// panic instead of returning one of these.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("tile block size must be non-zero")]
    ZeroBlockSize,

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),
}
