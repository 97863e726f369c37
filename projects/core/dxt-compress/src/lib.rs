#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alpha_block;
pub mod block_4x4;
pub mod color_565;
pub mod color_8888;
pub mod color_block;
pub mod color_line;
pub mod compress;
pub mod error;
pub mod format;
pub mod image_blocks;
pub mod optimize_blocks;
pub mod settings;

// Re-export the main entry points at the crate root
pub use alpha_block::encode_alpha_block;
pub use color_block::encode_color_block;
pub use color_line::fit_color_endpoints;
pub use compress::{compress, compress_image, compress_into, CompressedImage};
pub use error::CompressError;
pub use format::{compressed_size, num_blocks, DxtFormat};
pub use image_blocks::SourceImage;
pub use optimize_blocks::{optimize_blocks, IndexPattern};
pub use settings::{CompressBuilder, CompressSettings};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
