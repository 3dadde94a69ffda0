//! # lzkit-lzw: Fixed-Width LZW Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! with a fixed code width chosen out of band.
//!
//! ## Stream Format
//!
//! - **Fixed-width codes**: every code is exactly `W` bits (9 to 24, default 15)
//! - **Bit order**: codes are rendered MSB-first, each committed byte is
//!   filled from bit 0 upward
//! - **No header, no clear codes, no end code**: the stream ends when fewer
//!   than `W` bits remain, and the final byte is zero padded
//! - **Code 256 is reserved**: learned strings start at 257
//! - **Capacity**: the dictionary stops growing at `2^(W-1)` live entries
//!
//! ## Example
//!
//! ```rust
//! use lzkit_lzw::{compress, decompress, LzwConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original, LzwConfig::DEFAULT).unwrap();
//! let decompressed = decompress(&compressed, LzwConfig::DEFAULT).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! The width is not recorded in the stream, so both sides must use the
//! same configuration:
//!
//! ```rust
//! use lzkit_core::Codec;
//! use lzkit_lzw::{LzwCodec, LzwConfig};
//!
//! let codec = LzwCodec::new(LzwConfig::new(12).unwrap());
//! let data = b"This is a test of compression! ".repeat(10);
//! assert!(codec.verify_roundtrip(&data).unwrap().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;

pub use config::{LzwConfig, RESERVED_CODE, SEED_ENTRIES};
pub use decoder::LzwDecoder;
pub use dictionary::LzwDictionary;
pub use encoder::LzwEncoder;
pub use lzkit_core::error::{LzkitError, Result};

use lzkit_core::traits::Codec;

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use lzkit_lzw::{compress, LzwConfig};
///
/// let data = b"TOBEORNOTTOBEORTOBEORNOT";
/// let compressed = compress(data, LzwConfig::new(12).unwrap()).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config)?;
    let compressed = encoder.encode(data)?;

    log::debug!(
        "lzw: {} -> {} bytes, width {}, {} dictionary entries",
        data.len(),
        compressed.len(),
        config.code_width,
        encoder.dictionary_len()
    );

    Ok(compressed)
}

/// Decompress LZW-compressed data with the given configuration.
///
/// # Example
///
/// ```rust
/// use lzkit_lzw::{compress, decompress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::DEFAULT).unwrap();
/// let decompressed = decompress(&compressed, LzwConfig::DEFAULT).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    let decompressed = decoder.decode(data)?;

    log::debug!(
        "lzw: {} -> {} bytes, width {}, {} dictionary entries",
        data.len(),
        decompressed.len(),
        config.code_width,
        decoder.dictionary_len()
    );

    Ok(decompressed)
}

/// LZW as a [`Codec`] strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LzwCodec {
    config: LzwConfig,
}

impl LzwCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> LzwConfig {
        self.config
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input, self.config)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decompress(input, self.config)
    }
}
