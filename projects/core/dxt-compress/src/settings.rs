//! Compression settings and the builder used to configure them.

use crate::compress::{compress, compress_into, CompressedImage};
use crate::error::CompressError;
use crate::format::DxtFormat;

/// Settings for a single compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressSettings {
    /// The format of the produced block stream.
    pub format: DxtFormat,
    /// Whether to run the degenerate-block optimizer over the encoded blocks.
    pub optimize_blocks: bool,
}

impl Default for CompressSettings {
    fn default() -> Self {
        Self {
            format: DxtFormat::Bc1,
            optimize_blocks: true,
        }
    }
}

/// Fluent builder for [`CompressSettings`].
///
/// Unset options fall back to [`CompressSettings::default`].
///
/// # Examples
///
/// ```
/// use dxt_compress::{CompressBuilder, DxtFormat};
/// # use dxt_compress::CompressError;
///
/// # fn main() -> Result<(), CompressError> {
/// let pixels = [255u8, 0, 0, 255].repeat(16); // 4x4 solid red RGBA
/// let image = CompressBuilder::new()
///     .format(DxtFormat::Bc3)
///     .optimize_blocks(true)
///     .compress(&pixels, 4, 4, 4)?;
///
/// assert_eq!(image.data.len(), 16);
/// assert_eq!(&image.data[..8], &[255, 255, 0, 0, 0, 0, 0, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressBuilder {
    format: Option<DxtFormat>,
    optimize_blocks: Option<bool>,
}

impl CompressBuilder {
    /// Create a new builder with every option unset.
    pub fn new() -> Self {
        Self {
            format: None,
            optimize_blocks: None,
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: DxtFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set whether degenerate blocks are rewritten after encoding.
    ///
    /// The rewritten blocks decode to the same pixels; the only change is a more uniform
    /// byte pattern that compresses better under general purpose compressors.
    pub fn optimize_blocks(mut self, optimize: bool) -> Self {
        self.optimize_blocks = Some(optimize);
        self
    }

    /// Resolve the configured options into [`CompressSettings`].
    pub fn build(&self) -> CompressSettings {
        let defaults = CompressSettings::default();
        CompressSettings {
            format: self.format.unwrap_or(defaults.format),
            optimize_blocks: self.optimize_blocks.unwrap_or(defaults.optimize_blocks),
        }
    }

    /// Compress `pixels` into a newly allocated block stream.
    ///
    /// # Errors
    ///
    /// Returns [`CompressError`] if the image fails validation; see [`compress`].
    pub fn compress(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<CompressedImage, CompressError> {
        compress(pixels, width, height, channels, self.build())
    }

    /// Compress `pixels` into `output`, returning the number of optimized blocks.
    ///
    /// # Errors
    ///
    /// Returns [`CompressError`] if the image or output buffer fails validation; see [`compress_into`].
    pub fn compress_into(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
        channels: usize,
        output: &mut [u8],
    ) -> Result<usize, CompressError> {
        compress_into(pixels, width, height, channels, self.build(), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bc1_with_optimizer() {
        let settings = CompressSettings::default();
        assert_eq!(settings.format, DxtFormat::Bc1);
        assert!(settings.optimize_blocks);
        assert_eq!(CompressBuilder::new().build(), settings);
    }

    #[test]
    fn builder_overrides_each_option() {
        let settings = CompressBuilder::new()
            .format(DxtFormat::Bc3)
            .optimize_blocks(false)
            .build();
        assert_eq!(
            settings,
            CompressSettings {
                format: DxtFormat::Bc3,
                optimize_blocks: false,
            }
        );
    }
}
