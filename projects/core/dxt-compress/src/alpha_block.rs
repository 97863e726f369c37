//! # Alpha Block Encoding
//!
//! Encodes the alpha channel of a [`Block4x4`] into the 8-byte BC3 alpha block:
//!
//! ```text
//! Address: 0    1    2                 8
//!          +----+----+-----------------+
//! Data:    | A0 | A1 |    AI0-AI15     |
//!          +----+----+-----------------+
//! ```
//!
//! - `A0` is the largest and `A1` the smallest alpha in the block, which selects the
//!   8-entry (6 interpolated steps) palette on decode.
//! - `AI0-AI15` are sixteen 3-bit indices packed little-endian over 48 bits; an index may
//!   straddle two bytes.

use crate::block_4x4::Block4x4;
use likely_stable::unlikely;

/// Maps a bucket along `A1 ..= A0` (0 = A1 .. 7 = A0) to the palette index for that value.
const ALPHA_INDEX_REMAP: [u8; 8] = [1, 7, 6, 5, 4, 3, 2, 0];

/// Slightly below 8 so that the largest alpha lands in bucket 7.
const ALPHA_BUCKET_SCALE: f32 = 7.9999;

/// Encodes the alpha channel of `block` into an 8-byte BC3 alpha block.
///
/// A block with uniform alpha encodes to `[a, a, 0, 0, 0, 0, 0, 0]`.
///
/// # Examples
///
/// ```
/// use dxt_compress::block_4x4::Block4x4;
/// use dxt_compress::color_8888::Color8888;
/// use dxt_compress::encode_alpha_block;
///
/// let block = Block4x4::new(Color8888::new(255, 0, 0, 255));
/// assert_eq!(encode_alpha_block(&block), [255, 255, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn encode_alpha_block(block: &Block4x4) -> [u8; 8] {
    let (a0, a1) = block.alpha_range();

    let mut bytes = [0u8; 8];
    bytes[0] = a0;
    bytes[1] = a1;

    // Flat alpha; every index 0 selects A0.
    if unlikely(a0 == a1) {
        return bytes;
    }

    let scale = ALPHA_BUCKET_SCALE / (a0 - a1) as f32;
    let mut indices = 0u64;
    for (texel, pixel) in block.pixels.iter().enumerate() {
        let bucket = (((pixel.a - a1) as f32 * scale) as usize) & 7;
        indices |= (ALPHA_INDEX_REMAP[bucket] as u64) << (texel * 3);
    }

    bytes[2..8].copy_from_slice(&indices.to_le_bytes()[..6]);
    bytes
}

/// Returns the 3-bit index of texel `index` (0-15) from an encoded alpha block.
#[inline]
pub fn alpha_index_of(block: &[u8; 8], index: usize) -> u8 {
    let mut packed = [0u8; 8];
    packed[..6].copy_from_slice(&block[2..8]);
    ((u64::from_le_bytes(packed) >> (index * 3)) & 0b111) as u8
}
