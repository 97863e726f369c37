//! Errors returned by the validated compression entry points.

use thiserror::Error;

/// Validation errors for [`compress`](crate::compress) and [`compress_into`](crate::compress_into).
///
/// All checks run before any block is encoded; on error the output buffer is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressError {
    /// Channel count is not 1, 2, 3 or 4.
    #[error("Invalid channel count: {0} (must be between 1 and 4)")]
    InvalidChannelCount(usize),

    /// Width or height is zero, or the image is too large to address.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width of the image in pixels.
        width: usize,
        /// Height of the image in pixels.
        height: usize,
    },

    /// Pixel buffer is shorter than `width * height * channels`.
    #[error("Input buffer too small: needed {needed}, got {actual}")]
    InputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// Output buffer cannot hold every encoded block.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}
