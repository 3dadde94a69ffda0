//! Core trait implemented by every codec.
//!
//! All codecs work on fully materialized buffers: the whole input is in
//! memory before the transform starts and the whole output is returned at
//! once. Each call builds its own tables, so a codec value can be shared
//! between threads without locking.

use crate::error::Result;

/// A whole-buffer compressor/decompressor pair.
///
/// Implemented by the Huffman, LZ77 and LZW codecs. Parameters that the
/// wire format does not carry (window sizes, code widths) live in the codec
/// value, so the same value must be used on both sides.
pub trait Codec {
    /// Short, lowercase name of the method (e.g. `"lzw"`).
    fn name(&self) -> &'static str;

    /// Compress `input` into a new buffer.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress `input` into a new buffer.
    ///
    /// An empty `input` always yields an empty output.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Compress then decompress, returning the compressed form once the
    /// round trip has reproduced `input` byte for byte.
    fn verify_roundtrip(&self, input: &[u8]) -> Result<Option<Vec<u8>>> {
        let compressed = self.compress(input)?;
        let restored = self.decompress(&compressed)?;
        Ok((restored == input).then_some(compressed))
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}
