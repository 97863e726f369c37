//! # 4x4 Block
//!
//! This module provides the [`Block4x4`] structure, the 16 texels sampled from one tile of
//! the source image that the block encoders consume.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! Texels always carry an alpha channel. BC1 encoding never reads it.
//!
//! ## Usage
//!
//! ```
//! use dxt_compress::block_4x4::Block4x4;
//! use dxt_compress::color_8888::Color8888;
//!
//! // Horizontal alpha ramp over red pixels
//! let block = Block4x4::from_fn(|x, _| Color8888::new(255, 0, 0, (x * 85) as u8));
//!
//! assert_eq!(block.get_pixel(3, 0).a, 255);
//! assert_eq!(block.alpha_range(), (255, 0));
//! ```

use crate::color_8888::Color8888;

/// Represents a 4x4 block of texels awaiting compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block4x4 {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Block4x4 {
    /// Constructs a new block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress::block_4x4::Block4x4;
    /// use dxt_compress::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Block4x4::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Constructs a block by calling `f(x, y)` for every texel position.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Color8888) -> Self {
        Self {
            pixels: core::array::from_fn(|index| f(index % 4, index / 4)),
        }
    }

    /// Gets the pixel at the specified coordinates (0-3, 0-3)
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or larger.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "texel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Returns the `(max, min)` alpha found in the block.
    #[inline]
    pub fn alpha_range(&self) -> (u8, u8) {
        self.pixels
            .iter()
            .fold((self.pixels[0].a, self.pixels[0].a), |(max, min), pixel| {
                (max.max(pixel.a), min.min(pixel.a))
            })
    }
}
