//! Output formats and the sizes of the block streams they produce.

use derive_enum_all_values::AllValues;

/// Width and height of the texel tile covered by one block.
pub const BLOCK_DIMENSION: usize = 4;

/// The block-compressed format to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum DxtFormat {
    /// BC1 (DXT1): an 8-byte colour block per tile. Alpha is discarded.
    #[default]
    Bc1,
    /// BC3 (DXT5): an 8-byte alpha block followed by an 8-byte colour block per tile.
    Bc3,
}

impl DxtFormat {
    /// Size in bytes of one encoded block.
    #[inline]
    pub const fn block_size(self) -> usize {
        match self {
            DxtFormat::Bc1 => 8,
            DxtFormat::Bc3 => 16,
        }
    }

    /// Offset of the colour block inside one encoded block.
    #[inline]
    pub const fn color_block_offset(self) -> usize {
        match self {
            DxtFormat::Bc1 => 0,
            DxtFormat::Bc3 => 8,
        }
    }

    /// Whether each block starts with an alpha block.
    #[inline]
    pub const fn has_alpha_block(self) -> bool {
        matches!(self, DxtFormat::Bc3)
    }
}

/// Number of 4x4 tiles needed to cover a `width` x `height` image.
///
/// Partial tiles at the right and bottom edges count as whole tiles.
///
/// # Examples
///
/// ```
/// use dxt_compress::num_blocks;
///
/// assert_eq!(num_blocks(4, 4), 1);
/// assert_eq!(num_blocks(5, 5), 4);
/// assert_eq!(num_blocks(8, 1), 2);
/// ```
#[inline]
pub const fn num_blocks(width: usize, height: usize) -> usize {
    width.div_ceil(BLOCK_DIMENSION) * height.div_ceil(BLOCK_DIMENSION)
}

/// Size in bytes of the compressed stream for a `width` x `height` image.
///
/// # Examples
///
/// ```
/// use dxt_compress::{compressed_size, DxtFormat};
///
/// assert_eq!(compressed_size(8, 4, DxtFormat::Bc1), 16);
/// assert_eq!(compressed_size(8, 4, DxtFormat::Bc3), 32);
/// ```
#[inline]
pub const fn compressed_size(width: usize, height: usize, format: DxtFormat) -> usize {
    num_blocks(width, height) * format.block_size()
}

/// [`compressed_size`] returning [`None`] when the result would overflow `usize`.
#[inline]
pub(crate) fn checked_compressed_size(
    width: usize,
    height: usize,
    format: DxtFormat,
) -> Option<usize> {
    width
        .div_ceil(BLOCK_DIMENSION)
        .checked_mul(height.div_ceil(BLOCK_DIMENSION))?
        .checked_mul(format.block_size())
}
