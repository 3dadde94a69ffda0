//! Fixed-width `(offset, length, literal)` triplets.

use crate::config::{LITERAL_BITS, Lz77Config};
use lzkit_core::bitstream::{BitReader, BitWriter};
use lzkit_core::error::{LzkitError, Result};

/// One LZ77 step: copy `length` bytes from `offset` back, then emit `literal`.
///
/// On the wire the fields are written LSB-first in the order literal,
/// length, `offset - 1`, using the widths from [`Lz77Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet {
    /// Distance back into the output, `1..=S`. Ignored when `length` is 0.
    pub offset: usize,
    /// Number of bytes to copy, `0..=T`.
    pub length: usize,
    /// Byte following the match.
    pub literal: u8,
}

impl Triplet {
    /// A triplet that only emits `literal`.
    pub fn literal(literal: u8) -> Self {
        Self {
            offset: 1,
            length: 0,
            literal,
        }
    }

    /// Write the triplet, checking every field against its width.
    pub fn write_to(&self, writer: &mut BitWriter, config: &Lz77Config) -> Result<()> {
        if self.offset == 0 || self.offset > config.window_size {
            return Err(LzkitError::capacity_exceeded(
                "offset",
                self.offset as u64,
                config.offset_bits() as u32,
            ));
        }
        if self.length > config.lookahead_size {
            return Err(LzkitError::capacity_exceeded(
                "length",
                self.length as u64,
                config.length_bits() as u32,
            ));
        }

        writer.write_bits_lsb(self.literal as u64, LITERAL_BITS);
        writer.write_bits_lsb(self.length as u64, config.length_bits());
        writer.write_bits_lsb(self.offset as u64 - 1, config.offset_bits());
        Ok(())
    }

    /// Read one triplet. Nothing is consumed if a full triplet is not there.
    pub fn read_from(reader: &mut BitReader<'_>, config: &Lz77Config) -> Result<Self> {
        let needed = config.triplet_bits();
        if reader.bits_remaining() < needed {
            return Err(LzkitError::truncated(reader.bit_position(), needed));
        }

        let literal = reader.read_bits(LITERAL_BITS)? as u8;
        let length = reader.read_bits(config.length_bits())? as usize;
        let offset = reader.read_bits(config.offset_bits())? as usize + 1;

        Ok(Self {
            offset,
            length,
            literal,
        })
    }
}
