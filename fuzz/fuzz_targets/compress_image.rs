#![no_main]

// This fuzz test compresses arbitrary images and checks that every valid image produces a
// stream of the expected size, and that the optimizer has nothing left to do afterwards.

use dxt_compress::{compress, compressed_size, optimize_blocks, CompressSettings, DxtFormat};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub width: u8,
    pub height: u8,
    pub channels: u8,
    pub bc3: bool,
    pub optimize_blocks: bool,
    pub pixels: Vec<u8>,
}

fuzz_target!(|image: Image| {
    let width = image.width as usize;
    let height = image.height as usize;
    let format = if image.bc3 { DxtFormat::Bc3 } else { DxtFormat::Bc1 };
    let settings = CompressSettings {
        format,
        optimize_blocks: image.optimize_blocks,
    };

    // Invalid images must be rejected, never panic.
    let Ok(compressed) = compress(&image.pixels, width, height, image.channels as usize, settings)
    else {
        return;
    };

    assert_eq!(compressed.data.len(), compressed_size(width, height, format));
    assert!(compressed.optimized_blocks <= compressed.num_blocks);

    let mut data = compressed.data.clone();
    let rewritten = optimize_blocks(&mut data, format);
    if image.optimize_blocks {
        assert_eq!(rewritten, 0, "Optimized stream was rewritten again");
        assert_eq!(data, compressed.data);
    }
});
