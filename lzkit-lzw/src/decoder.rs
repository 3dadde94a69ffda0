//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary one step behind it: the
//! entry the encoder learned while emitting code `n` is learned here while
//! reading code `n + 1`. The only code that can arrive before it is known is
//! the next one to be assigned, whose string is the previous string plus its
//! own first byte.

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use lzkit_core::bitstream::BitReader;
use lzkit_core::error::{LzkitError, Result};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Decode LZW-compressed data.
    ///
    /// Codes are read until fewer than `code_width` bits remain. Those last
    /// bits are the zero padding of the final byte, so more than seven of
    /// them means the stream was cut inside a code.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.dict.reset();

        let width = self.dict.config().code_width;
        let mut reader = BitReader::new(input);
        let mut output = Vec::with_capacity(input.len() * 2);

        // Previous code (for dictionary building)
        let mut prev_code: Option<u32> = None;

        loop {
            let remaining = reader.bits_remaining();
            if remaining < width as u64 {
                if remaining >= 8 {
                    return Err(LzkitError::truncated(
                        reader.bit_position(),
                        width as u64,
                    ));
                }
                break;
            }

            let code = reader.read_bits_msb(width)? as u32;

            let string = if code < self.dict.next_code() {
                // Code exists in dictionary - this is the common case
                self.dict.get_string(code)?.to_vec()
            } else {
                // Only the code about to be assigned may be unknown, and
                // only when a previous string exists to derive it from.
                match prev_code {
                    Some(prev) if code == self.dict.next_code() && !self.dict.is_full() => {
                        let prev_string = self.dict.get_string(prev)?;
                        let mut new_string = prev_string.to_vec();
                        new_string.push(prev_string[0]);
                        new_string
                    }
                    _ => return Err(LzkitError::invalid_code(code, self.dict.next_code())),
                }
            };

            // Output the decoded string
            output.extend_from_slice(&string);

            // Learn prev + first byte of this string (if there is room)
            if let Some(prev) = prev_code {
                let _ = self.dict.add(prev, string[0]);
            }

            prev_code = Some(code);
        }

        Ok(output)
    }

    /// Number of live dictionary entries after the last `decode` call.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
