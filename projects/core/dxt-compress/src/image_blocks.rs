//! # Image Block Iteration
//!
//! Splits a borrowed pixel buffer into 4x4 [`Block4x4`] tiles in row-major tile order.
//!
//! ## Channel Layout
//!
//! | Channels | Colour                | Alpha       |
//! |----------|-----------------------|-------------|
//! | 1        | grey broadcast to RGB | opaque      |
//! | 2        | grey broadcast to RGB | 2nd channel |
//! | 3        | RGB                   | opaque      |
//! | 4        | RGB                   | 4th channel |
//!
//! An even channel count means the last channel is alpha.
//!
//! ## Edge Tiles
//!
//! Tiles that extend past the right or bottom edge repeat the last valid column or row.

use crate::block_4x4::Block4x4;
use crate::color_8888::Color8888;
use crate::error::CompressError;
use crate::format::BLOCK_DIMENSION;

/// A row-major pixel buffer borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
}

impl<'a> SourceImage<'a> {
    /// Wraps `pixels` after validating the dimensions, channel count and buffer length.
    ///
    /// # Errors
    ///
    /// - [`CompressError::InvalidChannelCount`] if `channels` is not in `1..=4`
    /// - [`CompressError::InvalidDimensions`] if `width` or `height` is zero, or the pixel count overflows
    /// - [`CompressError::InputBufferTooSmall`] if `pixels` is shorter than `width * height * channels`
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress::SourceImage;
    /// use dxt_compress::CompressError;
    ///
    /// let pixels = [0u8; 4 * 4 * 3];
    /// assert!(SourceImage::new(&pixels, 4, 4, 3).is_ok());
    /// assert_eq!(
    ///     SourceImage::new(&pixels, 4, 4, 4).unwrap_err(),
    ///     CompressError::InputBufferTooSmall { needed: 64, actual: 48 }
    /// );
    /// ```
    pub fn new(
        pixels: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, CompressError> {
        if !(1..=4).contains(&channels) {
            return Err(CompressError::InvalidChannelCount(channels));
        }

        let needed = width
            .checked_mul(height)
            .and_then(|count| count.checked_mul(channels))
            .filter(|_| width != 0 && height != 0)
            .ok_or(CompressError::InvalidDimensions { width, height })?;

        if pixels.len() < needed {
            return Err(CompressError::InputBufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }

        Ok(Self::new_unchecked(pixels, width, height, channels))
    }

    /// Wraps `pixels` without validating it.
    ///
    /// # Panics
    ///
    /// [`extract_block`](Self::extract_block) panics on out-of-range reads if `pixels` is shorter than
    /// `width * height * channels`, or if `channels` is 0.
    #[inline]
    pub fn new_unchecked(pixels: &'a [u8], width: usize, height: usize, channels: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            channels,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Whether the last channel of each pixel holds alpha.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels % 2 == 0
    }

    /// Number of tiles per row of blocks.
    #[inline]
    pub fn blocks_wide(&self) -> usize {
        self.width.div_ceil(BLOCK_DIMENSION)
    }

    /// Number of rows of blocks.
    #[inline]
    pub fn blocks_high(&self) -> usize {
        self.height.div_ceil(BLOCK_DIMENSION)
    }

    /// Reads the pixel at `(x, y)`, expanded to RGBA.
    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Color8888 {
        let offset = (y * self.width + x) * self.channels;
        let pixel = &self.pixels[offset..offset + self.channels];

        // Grey sources read red for every colour channel.
        let step = if self.channels < 3 { 0 } else { 1 };
        let alpha = if self.has_alpha() {
            pixel[self.channels - 1]
        } else {
            255
        };
        Color8888::new(pixel[0], pixel[step], pixel[2 * step], alpha)
    }

    /// Samples the 4x4 tile at tile coordinates `(tile_x, tile_y)`.
    ///
    /// Texels past the right or bottom edge repeat the last valid column or row.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress::SourceImage;
    /// use dxt_compress::color_8888::Color8888;
    ///
    /// // 2x1 greyscale image
    /// let image = SourceImage::new(&[10, 20], 2, 1, 1).unwrap();
    /// let block = image.extract_block(0, 0);
    /// assert_eq!(block.get_pixel(0, 3), Color8888::new(10, 10, 10, 255));
    /// assert_eq!(block.get_pixel(3, 3), Color8888::new(20, 20, 20, 255));
    /// ```
    pub fn extract_block(&self, tile_x: usize, tile_y: usize) -> Block4x4 {
        let last_x = self.width - 1;
        let last_y = self.height - 1;
        let base_x = tile_x * BLOCK_DIMENSION;
        let base_y = tile_y * BLOCK_DIMENSION;

        Block4x4::from_fn(|x, y| self.pixel((base_x + x).min(last_x), (base_y + y).min(last_y)))
    }

    /// Iterates over every tile in row-major tile order.
    pub fn blocks(&self) -> impl Iterator<Item = Block4x4> + '_ {
        let blocks_wide = self.blocks_wide();
        (0..self.blocks_high())
            .flat_map(move |tile_y| (0..blocks_wide).map(move |tile_x| (tile_x, tile_y)))
            .map(|(tile_x, tile_y)| self.extract_block(tile_x, tile_y))
    }
}
