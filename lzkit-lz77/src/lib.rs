//! # lzkit-lz77: Sliding-Window LZ77
//!
//! Classic LZ77 producing fixed-width `(offset, length, literal)` triplets.
//!
//! ## Stream Format
//!
//! ```text
//! +----------------------+---------+---------+-----
//! | decoded length (u64) | triplet | triplet | ...
//! +----------------------+---------+---------+-----
//! ```
//!
//! - The decoded length is 8 little-endian bytes.
//! - Each triplet is `8 + ceil(log2(T + 1)) + ceil(log2(S))` bits: literal,
//!   length, then `offset - 1`, each LSB-first.
//! - Window size `S` and lookahead size `T` are agreed out of band.
//! - Empty input compresses to an empty stream.
//!
//! ## Example
//!
//! ```rust
//! use lzkit_lz77::{compress, decompress, Lz77Config};
//!
//! let config = Lz77Config::new(8, 4).unwrap();
//! let compressed = compress(b"ABABAB", config).unwrap();
//! assert_eq!(decompress(&compressed, config).unwrap(), b"ABABAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod triplet;

pub use config::{LENGTH_PREFIX_BITS, LITERAL_BITS, Lz77Config, bit_length};
pub use decoder::Lz77Decoder;
pub use encoder::Lz77Encoder;
pub use lzkit_core::error::{LzkitError, Result};
pub use triplet::Triplet;

use lzkit_core::traits::Codec;

/// Compress data with LZ77 using the given configuration.
pub fn compress(data: &[u8], config: Lz77Config) -> Result<Vec<u8>> {
    Lz77Encoder::new(config)?.encode(data)
}

/// Decompress LZ77 data with the given configuration.
pub fn decompress(data: &[u8], config: Lz77Config) -> Result<Vec<u8>> {
    Lz77Decoder::new(config)?.decode(data)
}

/// LZ77 as a [`Codec`] strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lz77Codec {
    config: Lz77Config,
}

impl Lz77Codec {
    /// Create a codec with the given configuration.
    pub fn new(config: Lz77Config) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> Lz77Config {
        self.config
    }
}

impl Codec for Lz77Codec {
    fn name(&self) -> &'static str {
        "lz77"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input, self.config)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input, self.config)
    }
}
