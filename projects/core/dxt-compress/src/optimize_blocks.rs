//! # Degenerate Block Optimization
//!
//! Rewrites encoded blocks whose colour indices all point at the same palette entry (or, for BC3,
//! only at the interpolated entries) into a canonical form that decodes to the same pixels.
//! This leaves more repeated bytes in the stream, which helps any compressor applied afterwards.
//!
//! ## Rewrite Rules
//!
//! | Indices         | Rewritten to (`C0`, `C1`, indices)                              |
//! |-----------------|-----------------------------------------------------------------|
//! | all 0           | (`C0`, 0, 0)                                                    |
//! | all 1           | (`C1`, 0, 0)                                                    |
//! | all 2           | (`2/3 C0 + 1/3 C1`, 0, 0); BC1 3-colour blocks use `1/2 C0 + 1/2 C1` |
//! | all 3           | (`1/3 C0 + 2/3 C1`, 0, 0); BC1 3-colour blocks become transparent black (0, `0xFFFF`, all 3) |
//! | only 2 and 3    | BC3 only: (`1/3 C0 + 2/3 C1`, `2/3 C0 + 1/3 C1`, inverted indices) |
//!
//! After these, BC3 blocks with `C0 < C1` have their endpoints swapped and every index's low bit
//! flipped, so that `C0 >= C1` always holds.
//!
//! A block only counts as optimized when its bytes change, so running the pass twice reports
//! zero rewrites the second time.

use crate::color_565::{BlendWeight, Color565};
use crate::color_block::ColorBlock;
use crate::format::DxtFormat;
use likely_stable::unlikely;
use log::trace;

/// Shape of the 32-bit colour index field of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPattern {
    /// Every texel uses index 0.
    SolidColor0,
    /// Every texel uses index 1.
    SolidColor1,
    /// Every texel uses index 2.
    SolidColor2,
    /// Every texel uses index 3.
    SolidColor3,
    /// Every texel uses index 2 or 3, and both occur.
    InterpolatedOnly,
    /// Anything else.
    Mixed,
}

impl IndexPattern {
    /// Classifies a packed colour index field.
    #[inline]
    pub fn classify(indices: u32) -> Self {
        match indices {
            0x0000_0000 => IndexPattern::SolidColor0,
            0x5555_5555 => IndexPattern::SolidColor1,
            0xAAAA_AAAA => IndexPattern::SolidColor2,
            0xFFFF_FFFF => IndexPattern::SolidColor3,
            _ if indices & 0xAAAA_AAAA == 0xAAAA_AAAA => IndexPattern::InterpolatedOnly,
            _ => IndexPattern::Mixed,
        }
    }
}

/// Rewrites degenerate blocks in `data` in place and returns how many blocks changed.
///
/// `data` is a stream of whole `format` blocks; trailing bytes that do not form a whole block
/// are left untouched. Alpha blocks are never modified.
///
/// # Examples
///
/// ```
/// use dxt_compress::{optimize_blocks, DxtFormat};
///
/// // BC1 block: both endpoints red, every index 0
/// let mut data = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
/// assert_eq!(optimize_blocks(&mut data, DxtFormat::Bc1), 1);
/// assert_eq!(data, [0x00, 0xF8, 0x00, 0x00, 0, 0, 0, 0]);
///
/// // Already canonical
/// assert_eq!(optimize_blocks(&mut data, DxtFormat::Bc1), 0);
/// ```
pub fn optimize_blocks(data: &mut [u8], format: DxtFormat) -> usize {
    let color_offset = format.color_block_offset();
    let mut optimized = 0;

    for (index, block) in data.chunks_exact_mut(format.block_size()).enumerate() {
        let color_bytes = &mut block[color_offset..color_offset + 8];
        let original = ColorBlock::read(color_bytes);
        let rewritten = optimize_color_block(original, format);

        if unlikely(rewritten != original) {
            trace!(
                "Block {}: {:?} -> {:?} ({:?})",
                index,
                original,
                rewritten,
                IndexPattern::classify(original.indices)
            );
            color_bytes.copy_from_slice(&rewritten.to_bytes());
            optimized += 1;
        }
    }

    optimized
}

/// Returns the canonical form of a single colour block.
pub fn optimize_color_block(block: ColorBlock, format: DxtFormat) -> ColorBlock {
    let ColorBlock {
        color0,
        color1,
        indices,
    } = block;

    // BC3 colour blocks always decode with the 4-colour palette.
    let four_color = format == DxtFormat::Bc3 || color0.greater_than(&color1);
    let solid = |color: Color565| ColorBlock {
        color0: color,
        color1: Color565::BLACK,
        indices: 0,
    };

    let rewritten = match IndexPattern::classify(indices) {
        IndexPattern::SolidColor0 => solid(color0),
        IndexPattern::SolidColor1 => solid(color1),
        IndexPattern::SolidColor2 if four_color => solid(color0.blend(color1, BlendWeight::OneThird)),
        IndexPattern::SolidColor2 => solid(color0.blend(color1, BlendWeight::Half)),
        IndexPattern::SolidColor3 if four_color => solid(color0.blend(color1, BlendWeight::TwoThirds)),
        IndexPattern::SolidColor3 => ColorBlock {
            color0: Color565::BLACK,
            color1: Color565::from_raw(0xFFFF),
            indices,
        },
        IndexPattern::InterpolatedOnly if format == DxtFormat::Bc3 => ColorBlock {
            color0: color0.blend(color1, BlendWeight::TwoThirds),
            color1: color0.blend(color1, BlendWeight::OneThird),
            indices: !indices,
        },
        IndexPattern::InterpolatedOnly | IndexPattern::Mixed => block,
    };

    if format == DxtFormat::Bc3 && rewritten.color0 < rewritten.color1 {
        ColorBlock {
            color0: rewritten.color1,
            color1: rewritten.color0,
            indices: rewritten.indices ^ 0x5555_5555,
        }
    } else {
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const RED: Color565 = Color565::from_rgb(255, 0, 0);
    const BLUE: Color565 = Color565::from_rgb(0, 0, 255);

    fn color_block(color0: Color565, color1: Color565, indices: u32) -> ColorBlock {
        ColorBlock {
            color0,
            color1,
            indices,
        }
    }

    #[rstest]
    #[case(0x0000_0000, IndexPattern::SolidColor0)]
    #[case(0x5555_5555, IndexPattern::SolidColor1)]
    #[case(0xAAAA_AAAA, IndexPattern::SolidColor2)]
    #[case(0xFFFF_FFFF, IndexPattern::SolidColor3)]
    #[case(0xEAAA_AAAF, IndexPattern::InterpolatedOnly)]
    #[case(0x0000_0001, IndexPattern::Mixed)]
    #[case(0xAAAA_AAA9, IndexPattern::Mixed)]
    fn classifies_index_patterns(#[case] indices: u32, #[case] expected: IndexPattern) {
        assert_eq!(IndexPattern::classify(indices), expected);
    }

    #[rstest]
    #[case(DxtFormat::Bc1, color_block(RED, BLUE, 0x0000_0000), color_block(RED, Color565::BLACK, 0))]
    #[case(DxtFormat::Bc1, color_block(RED, BLUE, 0x5555_5555), color_block(BLUE, Color565::BLACK, 0))]
    #[case(DxtFormat::Bc1, color_block(RED, BLUE, 0xAAAA_AAAA), color_block(RED.blend(BLUE, BlendWeight::OneThird), Color565::BLACK, 0))]
    #[case(DxtFormat::Bc1, color_block(BLUE, RED, 0xAAAA_AAAA), color_block(BLUE.blend(RED, BlendWeight::Half), Color565::BLACK, 0))]
    #[case(DxtFormat::Bc1, color_block(RED, BLUE, 0xFFFF_FFFF), color_block(RED.blend(BLUE, BlendWeight::TwoThirds), Color565::BLACK, 0))]
    #[case(DxtFormat::Bc1, color_block(BLUE, RED, 0xFFFF_FFFF), color_block(Color565::BLACK, Color565::from_raw(0xFFFF), 0xFFFF_FFFF))]
    #[case(DxtFormat::Bc1, color_block(RED, BLUE, 0xEAAA_AAAF), color_block(RED, BLUE, 0xEAAA_AAAF))]
    #[case(DxtFormat::Bc3, color_block(BLUE, RED, 0xAAAA_AAAA), color_block(BLUE.blend(RED, BlendWeight::OneThird), Color565::BLACK, 0))]
    #[case(DxtFormat::Bc3, color_block(BLUE, RED, 0xFFFF_FFFF), color_block(BLUE.blend(RED, BlendWeight::TwoThirds), Color565::BLACK, 0))]
    #[case(DxtFormat::Bc3, color_block(BLUE, RED, 0x1234_5678), color_block(RED, BLUE, 0x1234_5678 ^ 0x5555_5555))]
    fn rewrites_degenerate_blocks(
        #[case] format: DxtFormat,
        #[case] input: ColorBlock,
        #[case] expected: ColorBlock,
    ) {
        assert_eq!(optimize_color_block(input, format), expected);
    }

    #[test]
    fn bc3_interpolated_only_block_collapses_onto_endpoints() {
        let input = color_block(RED, BLUE, 0xEAAA_AAAF);
        let output = optimize_color_block(input, DxtFormat::Bc3);

        let two_thirds = RED.blend(BLUE, BlendWeight::TwoThirds);
        let one_third = RED.blend(BLUE, BlendWeight::OneThird);
        assert_eq!(output.color0, two_thirds.max(one_third));
        assert_eq!(output.color1, two_thirds.min(one_third));
        assert!(output.color0 >= output.color1);

        // Indices now only select the endpoints.
        assert_eq!(output.indices & 0xAAAA_AAAA, 0);
    }

    #[rstest]
    #[case(DxtFormat::Bc1)]
    #[case(DxtFormat::Bc3)]
    fn rewritten_blocks_decode_to_same_pixels(#[case] format: DxtFormat) {
        // Palettes of blocks without interpolated-only indices survive a rewrite exactly.
        let endpoints = [
            (RED, BLUE),
            (BLUE, RED),
            (Color565::from_raw(0xFFFF), Color565::BLACK),
            (Color565::from_rgb(200, 100, 50), Color565::from_rgb(200, 100, 50)),
        ];
        for (color0, color1) in endpoints {
            for indices in [0x0000_0000, 0x5555_5555] {
                let input = color_block(color0, color1, indices);
                let output = optimize_color_block(input, format);
                assert_eq!(
                    decode_color_block(&output.to_bytes()),
                    decode_color_block(&input.to_bytes()),
                    "{format:?} {input:?}"
                );
            }
        }

        // BC1 transparent black keeps decoding to transparent black.
        if format == DxtFormat::Bc1 {
            let input = color_block(BLUE, RED, 0xFFFF_FFFF);
            let output = optimize_color_block(input, format);
            assert_eq!(
                decode_color_block(&output.to_bytes()),
                decode_color_block(&input.to_bytes())
            );
        }
    }

    #[rstest]
    #[case(DxtFormat::Bc1)]
    #[case(DxtFormat::Bc3)]
    fn second_pass_reports_no_rewrites(#[case] format: DxtFormat) {
        let mut data = Vec::new();
        let patterns = [0x0000_0000, 0x5555_5555, 0xAAAA_AAAA, 0xFFFF_FFFF, 0xEAAA_AAAF, 0x1234_5678];
        for indices in patterns {
            for (color0, color1) in [(RED, BLUE), (BLUE, RED), (RED, RED)] {
                if format.has_alpha_block() {
                    data.extend_from_slice(&[0xFF, 0x00, 1, 2, 3, 4, 5, 6]);
                }
                data.extend_from_slice(&color_block(color0, color1, indices).to_bytes());
            }
        }
        let alpha_before: Vec<u8> = data.clone();

        assert!(optimize_blocks(&mut data, format) > 0);
        let once = data.clone();
        assert_eq!(optimize_blocks(&mut data, format), 0);
        assert_eq!(data, once);

        if format.has_alpha_block() {
            for (block, before) in data.chunks_exact(16).zip(alpha_before.chunks_exact(16)) {
                assert_eq!(block[..8], before[..8]);
            }
        }
    }

    #[test]
    fn trailing_partial_block_is_ignored() {
        let mut data = vec![0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0, 0xAB, 0xCD];
        assert_eq!(optimize_blocks(&mut data, DxtFormat::Bc1), 1);
        assert_eq!(&data[8..], &[0xAB, 0xCD]);
    }
}
