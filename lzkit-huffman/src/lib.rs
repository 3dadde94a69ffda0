//! # lzkit-huffman: Static Huffman Coding
//!
//! A byte-oriented Huffman coder whose tree is rebuilt on both sides from a
//! frequency header, plus an end-of-stream sentinel that terminates the
//! payload.
//!
//! ## Stream Format
//!
//! ```text
//! <count> <b0><f0> <b1><f1> ... <payload bits>
//! ```
//!
//! See [`header`] for the header grammar. The payload holds one code per
//! input byte followed by the sentinel's code, packed by
//! [`lzkit_core::BitWriter::write_bits`] and zero padded to a byte.
//!
//! The tree queue is a binary min-heap that compares weights only, so
//! equal weights leave it in heap order, not insertion order. Streams whose
//! frequencies tie depend on that exact order; see [`PrefixTree::build`].
//!
//! ## Example
//!
//! ```rust
//! use lzkit_huffman::{compress, decompress};
//!
//! let original = b"this is an example of a huffman tree";
//! let compressed = compress(original).unwrap();
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod frequency;
pub mod header;
mod symbol;
mod tree;

pub use codec::HuffmanCodec;
pub use frequency::FrequencyTable;
pub use lzkit_core::error::{LzkitError, Result};
pub use symbol::Symbol;
pub use tree::{Code, CodeTable, MAX_CODE_LENGTH, Node, PrefixTree};

/// Compress data with static Huffman coding.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().encode(data)
}

/// Decompress a Huffman stream produced by [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::new().decode(data)
}
