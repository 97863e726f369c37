#![no_main]

// This fuzz test validates the block optimizer on arbitrary block streams by checking that
// a second pass changes nothing and that alpha blocks are never touched.

use dxt_compress::{optimize_blocks, DxtFormat};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Blocks {
    pub bc3: bool,
    pub bytes: Vec<u8>,
}

fuzz_target!(|blocks: Blocks| {
    let format = if blocks.bc3 { DxtFormat::Bc3 } else { DxtFormat::Bc1 };
    let mut data = blocks.bytes.clone();

    let rewritten = optimize_blocks(&mut data, format);
    assert!(rewritten <= data.len() / format.block_size());

    // Alpha blocks and trailing bytes are left as-is
    for (block, original) in data
        .chunks_exact(format.block_size())
        .zip(blocks.bytes.chunks_exact(format.block_size()))
    {
        assert_eq!(
            block[..format.color_block_offset()],
            original[..format.color_block_offset()]
        );
    }
    let whole = data.len() - data.len() % format.block_size();
    assert_eq!(data[whole..], blocks.bytes[whole..]);

    let optimized = data.clone();
    assert_eq!(
        optimize_blocks(&mut data, format),
        0,
        "Second optimizer pass rewrote blocks\n\
         Input: {:?}\n\
         Optimized: {optimized:?}",
        blocks.bytes
    );
    assert_eq!(data, optimized);
});
