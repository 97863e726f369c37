//! Common test imports and utilities for dxt-compress tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::color_565::{BlendWeight, Color565};
use crate::color_8888::Color8888;

/// Reference BC1 colour block decoder.
///
/// Uses the 4-colour palette when `C0 > C1`, otherwise the 3-colour palette with
/// index 3 as transparent black.
pub(crate) fn decode_color_block(bytes: &[u8]) -> [Color8888; 16] {
    let color0 = Color565::from_raw(u16::from_le_bytes([bytes[0], bytes[1]]));
    let color1 = Color565::from_raw(u16::from_le_bytes([bytes[2], bytes[3]]));
    let indices = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    let c0 = color0.to_rgb();
    let c1 = color1.to_rgb();
    let mix = |weight: BlendWeight| {
        let mixed: [u8; 3] = core::array::from_fn(|i| {
            let (a, b) = (c0[i] as u16, c1[i] as u16);
            (match weight {
                BlendWeight::OneThird => (2 * a + b) / 3,
                BlendWeight::TwoThirds => (a + 2 * b) / 3,
                BlendWeight::Half => (a + b) / 2,
            }) as u8
        });
        Color8888::new(mixed[0], mixed[1], mixed[2], 255)
    };

    let palette = if color0 > color1 {
        [
            color0.to_color_8888(),
            color1.to_color_8888(),
            mix(BlendWeight::OneThird),
            mix(BlendWeight::TwoThirds),
        ]
    } else {
        [
            color0.to_color_8888(),
            color1.to_color_8888(),
            mix(BlendWeight::Half),
            Color8888::new(0, 0, 0, 0),
        ]
    };

    core::array::from_fn(|texel| palette[((indices >> (texel * 2)) & 0b11) as usize])
}

/// Reference BC3 alpha block decoder.
pub(crate) fn decode_alpha_block(bytes: &[u8; 8]) -> [u8; 16] {
    let a0 = bytes[0] as u32;
    let a1 = bytes[1] as u32;

    let mut palette = [0u8; 8];
    palette[0] = a0 as u8;
    palette[1] = a1 as u8;
    if a0 > a1 {
        for i in 2..8 {
            palette[i] = (((8 - i as u32) * a0 + (i as u32 - 1) * a1) / 7) as u8;
        }
    } else {
        for i in 2..6 {
            palette[i] = (((6 - i as u32) * a0 + (i as u32 - 1) * a1) / 5) as u8;
        }
        palette[6] = 0;
        palette[7] = 255;
    }

    let mut packed = [0u8; 8];
    packed[..6].copy_from_slice(&bytes[2..8]);
    let indices = u64::from_le_bytes(packed);
    core::array::from_fn(|texel| palette[((indices >> (texel * 3)) & 0b111) as usize])
}

/// Generates a `width` x `height` image with `channels` bytes per pixel whose channels
/// all vary across the image.
pub(crate) fn gradient_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for channel in 0..channels {
                pixels.push((x * 37 + y * 11 + channel * 71 + x * y) as u8);
            }
        }
    }
    pixels
}
