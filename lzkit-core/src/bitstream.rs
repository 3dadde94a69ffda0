//! Bit-level I/O operations shared by every codec.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level over in-memory byte buffers.
//!
//! # Bit Ordering
//!
//! Bytes are filled starting from their least significant bit: the first bit
//! written to a byte lands in bit 0 and the eighth lands in bit 7. Put
//! differently, a run of bits is cut into groups of eight and each group is
//! stored reversed, with a trailing partial group zero-padded at the high end.
//! Existing compressed artifacts depend on this exact layout.
//!
//! On top of that layout a value can be rendered in two orders:
//!
//! - [`BitWriter::write_bits`] emits the value most significant bit first and
//!   pairs with [`BitReader::read_bits_msb`] (Huffman and LZW codes).
//! - [`BitWriter::write_bits_lsb`] emits it least significant bit first and
//!   pairs with [`BitReader::read_bits`] (LZ77 triplet fields).
//!
//! # Example
//!
//! ```
//! use lzkit_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits_lsb(0b1100, 4);
//! let output = writer.into_vec();
//!
//! let mut reader = BitReader::new(&output);
//! assert_eq!(reader.read_bits_msb(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{LzkitError, Result};

/// Maximum number of bits accepted by a single read or write call.
pub const MAX_BITS: u8 = 64;

/// A bit-level reader over a borrowed byte buffer.
///
/// Bits are consumed from each byte starting at bit 0. Multi-bit reads never
/// consume anything when they fail, so a caller can stop cleanly at the
/// zero padding of the last byte.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the byte holding the next bit.
    byte_pos: usize,
    /// Index of the next bit inside the current byte (0 = LSB).
    bit_pos: u8,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` over the given buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Get the number of bits consumed so far.
    pub fn bit_position(&self) -> u64 {
        self.byte_pos as u64 * 8 + self.bit_pos as u64
    }

    /// Get the number of bits that can still be read.
    pub fn bits_remaining(&self) -> u64 {
        (self.data.len() as u64 * 8).saturating_sub(self.bit_position())
    }

    /// Check if every bit of the input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.byte_pos >= self.data.len()
    }

    /// Read a single bit, or `None` once the input is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.byte_pos)?;
        let bit = (byte >> self.bit_pos) & 1 == 1;

        if self.bit_pos == 7 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        } else {
            self.bit_pos += 1;
        }

        Some(bit)
    }

    /// Fail with `TruncatedInput` unless `count` more bits are available.
    #[inline]
    fn ensure_available(&self, count: u8) -> Result<()> {
        debug_assert!(count <= MAX_BITS, "Cannot read more than 64 bits at once");

        if self.bits_remaining() < count as u64 {
            return Err(LzkitError::truncated(self.bit_position(), count as u64));
        }
        Ok(())
    }

    /// Read `count` bits, assembling the value LSB-first.
    ///
    /// The first bit read becomes bit 0 of the result.
    pub fn read_bits(&mut self, count: u8) -> Result<u64> {
        self.ensure_available(count)?;

        let mut value = 0u64;
        for i in 0..count {
            if self.read_bit().unwrap_or(false) {
                value |= 1u64 << i;
            }
        }
        Ok(value)
    }

    /// Read `count` bits, assembling the value MSB-first.
    ///
    /// The first bit read becomes bit `count - 1` of the result.
    pub fn read_bits_msb(&mut self, count: u8) -> Result<u64> {
        self.ensure_available(count)?;

        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.read_bit().unwrap_or(false) as u64;
        }
        Ok(value)
    }
}

/// A bit-level writer producing an owned byte buffer.
///
/// `BitWriter` keeps pending bits in a small accumulator and commits every
/// complete byte. Call [`flush`](Self::flush) or [`into_vec`](Self::into_vec)
/// when done to commit the final partial byte.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Committed bytes.
    output: Vec<u8>,
    /// Pending bits, the oldest in bit 0.
    buffer: u64,
    /// Number of pending bits.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create a new, empty `BitWriter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that appends after already-committed bytes.
    ///
    /// Used to place a bit-packed payload right after a byte-oriented header.
    pub fn with_prefix(prefix: Vec<u8>) -> Self {
        Self {
            output: prefix,
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far (excluding any prefix).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Commit complete bytes from the accumulator.
    #[inline]
    fn commit_bytes(&mut self) {
        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer |= (bit as u64) << self.bits_in_buffer;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.commit_bytes();
        }
    }

    /// Write the low `count` bits of `value`, most significant bit first.
    ///
    /// Together with the byte layout this reproduces the reference packing:
    /// the bit string is appended to the pending bits and every full group
    /// of eight is committed reversed.
    pub fn write_bits(&mut self, value: u64, count: u8) {
        debug_assert!(count <= MAX_BITS, "Cannot write more than 64 bits at once");

        if count == 0 {
            return;
        }

        let reversed = value.reverse_bits() >> (64 - count as u32);
        self.write_bits_lsb(reversed, count);
    }

    /// Write the low `count` bits of `value`, least significant bit first.
    pub fn write_bits_lsb(&mut self, value: u64, count: u8) {
        debug_assert!(count <= MAX_BITS, "Cannot write more than 64 bits at once");

        let mut value = if count < 64 {
            value & ((1u64 << count) - 1)
        } else {
            value
        };
        let mut remaining = count;

        // At most 7 bits stay pending after a commit, so 32-bit chunks
        // always fit into the accumulator.
        while remaining > 0 {
            let chunk = remaining.min(32);
            let bits = value & ((1u64 << chunk) - 1);

            self.buffer |= bits << self.bits_in_buffer;
            self.bits_in_buffer += chunk;
            self.total_bits_written += chunk as u64;
            self.commit_bytes();

            value >>= chunk;
            remaining -= chunk;
        }
    }

    /// Commit the pending bits as a final, zero-padded byte.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Flush and return the output data.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}
