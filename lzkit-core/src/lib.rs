//! # lzkit Core
//!
//! Core components shared by the lzkit codecs.
//!
//! This crate provides the fundamental building blocks:
//!
//! - [`bitstream`]: Bit-level I/O for variable-length and fixed-width codes
//! - [`traits`]: The [`Codec`] trait implemented by every codec
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     load all bytes, compress/decompress, compare        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec                                                   │
//! │     Huffman, LZ77, LZW (independent of each other)      │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     BitReader/BitWriter, Codec trait, LzkitError        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lzkit_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0x1AB, 9);
//! let data = writer.into_vec();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits_msb(9).unwrap(), 0x1AB);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ErrorKind, LzkitError, Result};
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ErrorKind, LzkitError, Result};
    pub use crate::traits::Codec;
}
