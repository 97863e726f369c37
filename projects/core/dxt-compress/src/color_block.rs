//! # Colour Block Encoding
//!
//! Encodes the RGB part of a [`Block4x4`] into the 8-byte colour block shared by BC1 and BC3:
//!
//! ```text
//! Address: 0        2        4       8
//!          +--------+--------+--------+
//! Data:    | Color0 | Color1 | Indices|
//!          +--------+--------+--------+
//! ```
//!
//! - `Color0` and `Color1` are little-endian RGB565 values, with `Color0 >= Color1`.
//! - `Indices` holds sixteen 2-bit palette indices, texel 0 in the lowest bits.
//!
//! Indices are picked against the endpoints as a decoder sees them (after RGB565 quantization),
//! not against the unquantized fit.

use crate::block_4x4::Block4x4;
use crate::color_565::Color565;
use crate::color_line::fit_color_endpoints;

/// Maps a position along the colour line (0 = color0 .. 3 = color1) to a palette index.
const COLOR_INDEX_REMAP: [u8; 4] = [0, 2, 3, 1];

/// A decoded view of an 8-byte colour block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlock {
    /// First endpoint.
    pub color0: Color565,
    /// Second endpoint.
    pub color1: Color565,
    /// Sixteen 2-bit palette indices, texel 0 in bits 0-1.
    pub indices: u32,
}

impl ColorBlock {
    /// Reads a colour block from the first 8 bytes of `bytes`.
    ///
    /// # Panics
    ///
    /// If `bytes` is shorter than 8 bytes.
    #[inline]
    pub fn read(bytes: &[u8]) -> Self {
        Self {
            color0: Color565::from_raw(u16::from_le_bytes([bytes[0], bytes[1]])),
            color1: Color565::from_raw(u16::from_le_bytes([bytes[2], bytes[3]])),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Serializes the block into its 8-byte on-disk form.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0..2].copy_from_slice(&self.color0.raw_value().to_le_bytes());
        bytes[2..4].copy_from_slice(&self.color1.raw_value().to_le_bytes());
        bytes[4..8].copy_from_slice(&self.indices.to_le_bytes());
        bytes
    }

    /// Returns the 2-bit palette index of texel `index` (0-15).
    #[inline]
    pub fn index_of(&self, index: usize) -> u8 {
        ((self.indices >> (index * 2)) & 0b11) as u8
    }
}

/// Encodes the colour channels of `block` into an 8-byte BC1/BC3 colour block.
///
/// # Examples
///
/// ```
/// use dxt_compress::block_4x4::Block4x4;
/// use dxt_compress::color_8888::Color8888;
/// use dxt_compress::encode_color_block;
///
/// let block = Block4x4::new(Color8888::new(255, 0, 0, 255));
/// assert_eq!(encode_color_block(&block), [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]);
/// ```
pub fn encode_color_block(block: &Block4x4) -> [u8; 8] {
    let (color0, color1) = fit_color_endpoints(block);
    ColorBlock {
        color0,
        color1,
        indices: select_color_indices(block, color0, color1),
    }
    .to_bytes()
}

/// Assigns each texel the palette index closest to it along the quantized `color0 -> color1` line.
fn select_color_indices(block: &Block4x4, color0: Color565, color1: Color565) -> u32 {
    let c0 = color0.to_rgb();
    let c1 = color1.to_rgb();

    let mut line = [0.0f32; 3];
    let mut length = 0.0f32;
    for i in 0..3 {
        line[i] = (c1[i] as i32 - c0[i] as i32) as f32;
        length += line[i] * line[i];
    }
    if length > 0.0 {
        length = 1.0 / length;
    }
    for component in &mut line {
        *component *= length;
    }

    let offset = line[0] * c0[0] as f32 + line[1] * c0[1] as f32 + line[2] * c0[2] as f32;

    let mut indices = 0u32;
    for (texel, pixel) in block.pixels.iter().enumerate() {
        // 0.0 at color0, 1.0 at color1
        let t = line[0] * pixel.r as f32 + line[1] * pixel.g as f32 + line[2] * pixel.b as f32
            - offset;
        let step = ((t * 3.0 + 0.5) as i32).clamp(0, 3) as usize;
        indices |= (COLOR_INDEX_REMAP[step] as u32) << (texel * 2);
    }

    indices
}
