//! # Image Compression
//!
//! Drives the block encoders over every tile of an image and optionally runs the
//! degenerate-block optimizer over the finished stream.
//!
//! ## Output Layout
//!
//! Blocks are written in row-major tile order. Each BC3 block stores its alpha block
//! before its colour block:
//!
//! ```text
//! BC1: [ colour 8 ]
//! BC3: [ alpha 8 ][ colour 8 ]
//! ```
//!
//! With the `rayon` feature, rows of tiles are encoded in parallel. Every tile writes only its
//! own block, so the output is identical to the sequential path.

use crate::alpha_block::encode_alpha_block;
use crate::color_block::encode_color_block;
use crate::error::CompressError;
use crate::format::{checked_compressed_size, DxtFormat};
use crate::image_blocks::SourceImage;
use crate::optimize_blocks::optimize_blocks;
use crate::settings::CompressSettings;
use alloc::vec;
use alloc::vec::Vec;
use log::debug;
use multiversion::multiversion;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A compressed block stream together with encoding statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// The encoded blocks, `num_blocks * format.block_size()` bytes.
    pub data: Vec<u8>,
    /// Format of [`data`](Self::data).
    pub format: DxtFormat,
    /// Number of blocks in [`data`](Self::data).
    pub num_blocks: usize,
    /// Number of blocks rewritten by the optimizer; 0 when it did not run.
    pub optimized_blocks: usize,
}

/// Compress an image into a newly allocated block stream.
///
/// # Parameters
///
/// - `pixels`: Row-major pixel data, `channels` bytes per pixel
/// - `width`: Width of the image in pixels
/// - `height`: Height of the image in pixels
/// - `channels`: Bytes per pixel (1-4). An even count means the last channel is alpha
/// - `settings`: Output format and optimizer toggle
///
/// # Errors
///
/// - [`CompressError::InvalidChannelCount`] if `channels` is not in `1..=4`
/// - [`CompressError::InvalidDimensions`] if `width` or `height` is zero or too large
/// - [`CompressError::InputBufferTooSmall`] if `pixels` is shorter than `width * height * channels`
///
/// # Examples
///
/// ```
/// use dxt_compress::{compress, CompressSettings, DxtFormat};
/// # use dxt_compress::CompressError;
///
/// # fn main() -> Result<(), CompressError> {
/// let pixels = [0u8, 0, 255].repeat(8 * 4); // 8x4 solid blue RGB
/// let settings = CompressSettings {
///     format: DxtFormat::Bc1,
///     optimize_blocks: false,
/// };
///
/// let image = compress(&pixels, 8, 4, 3, settings)?;
/// assert_eq!(image.num_blocks, 2);
/// assert_eq!(image.data.len(), 16);
/// assert_eq!(&image.data[..8], &image.data[8..]);
/// # Ok(())
/// # }
/// ```
pub fn compress(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    settings: CompressSettings,
) -> Result<CompressedImage, CompressError> {
    let image = SourceImage::new(pixels, width, height, channels)?;
    let size = checked_compressed_size(width, height, settings.format)
        .ok_or(CompressError::InvalidDimensions { width, height })?;

    let mut data = vec![0u8; size];
    let optimized_blocks = compress_image(&image, settings, &mut data);
    Ok(CompressedImage {
        num_blocks: size / settings.format.block_size(),
        format: settings.format,
        optimized_blocks,
        data,
    })
}

/// Compress an image into a caller provided buffer.
///
/// Only the first [`compressed_size`](crate::compressed_size) bytes of `output` are written.
///
/// # Returns
///
/// The number of blocks rewritten by the optimizer; 0 when it is disabled.
///
/// # Errors
///
/// Same as [`compress`], plus [`CompressError::OutputBufferTooSmall`] if `output` cannot hold
/// every block.
///
/// # Examples
///
/// ```
/// use dxt_compress::{compress_into, compressed_size, CompressSettings, DxtFormat};
/// # use dxt_compress::CompressError;
///
/// # fn main() -> Result<(), CompressError> {
/// let pixels = [128u8; 5 * 3]; // 5x3 greyscale
/// let settings = CompressSettings::default();
/// let mut output = vec![0u8; compressed_size(5, 3, settings.format)];
///
/// compress_into(&pixels, 5, 3, 1, settings, &mut output)?;
/// # Ok(())
/// # }
/// ```
pub fn compress_into(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    settings: CompressSettings,
    output: &mut [u8],
) -> Result<usize, CompressError> {
    let image = SourceImage::new(pixels, width, height, channels)?;
    let needed = checked_compressed_size(width, height, settings.format)
        .ok_or(CompressError::InvalidDimensions { width, height })?;

    if output.len() < needed {
        return Err(CompressError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    Ok(compress_image(&image, settings, &mut output[..needed]))
}

/// Compress an already validated image, returning the number of optimized blocks.
///
/// `output` must be exactly [`compressed_size`](crate::compressed_size) bytes long.
///
/// # Panics
///
/// If `image` was created with [`SourceImage::new_unchecked`] from invalid parameters.
pub fn compress_image(image: &SourceImage, settings: CompressSettings, output: &mut [u8]) -> usize {
    let format = settings.format;
    encode_blocks(image, format, output);

    let optimized_blocks = if settings.optimize_blocks {
        optimize_blocks(output, format)
    } else {
        0
    };

    debug!(
        "Compressed {}x{} image ({} channels) to {:?}: {} blocks, {} optimized",
        image.width(),
        image.height(),
        image.channels(),
        format,
        output.len() / format.block_size(),
        optimized_blocks
    );
    optimized_blocks
}

/// Encodes every tile of `image` into `output`, one row of tiles at a time.
#[cfg(not(feature = "rayon"))]
fn encode_blocks(image: &SourceImage, format: DxtFormat, output: &mut [u8]) {
    encode_blocks_sequential(image, format, output);
}

/// Encodes every tile of `image` into `output`, distributing rows of tiles over the rayon pool.
#[cfg(feature = "rayon")]
fn encode_blocks(image: &SourceImage, format: DxtFormat, output: &mut [u8]) {
    let row_size = image.blocks_wide() * format.block_size();
    output
        .par_chunks_mut(row_size)
        .enumerate()
        .for_each(|(tile_y, row)| encode_tile_row(image, format, tile_y, row));
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn encode_blocks_sequential(image: &SourceImage, format: DxtFormat, output: &mut [u8]) {
    let row_size = image.blocks_wide() * format.block_size();
    for (tile_y, row) in output.chunks_mut(row_size).enumerate() {
        encode_tile_row(image, format, tile_y, row);
    }
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
fn encode_tile_row<'a>(image: &SourceImage<'a>, format: DxtFormat, tile_y: usize, row: &mut [u8]) {
    let color_offset = format.color_block_offset();
    for (tile_x, block) in row.chunks_exact_mut(format.block_size()).enumerate() {
        let texels = image.extract_block(tile_x, tile_y);
        if format.has_alpha_block() {
            block[..8].copy_from_slice(&encode_alpha_block(&texels));
        }
        block[color_offset..color_offset + 8].copy_from_slice(&encode_color_block(&texels));
    }
}
