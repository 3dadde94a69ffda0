//! LZ77 decoder.

use crate::config::{LENGTH_PREFIX_BITS, Lz77Config};
use crate::triplet::Triplet;
use lzkit_core::bitstream::BitReader;
use lzkit_core::error::{LzkitError, Result};

/// LZ77 decoder.
#[derive(Debug, Clone)]
pub struct Lz77Decoder {
    config: Lz77Config,
}

impl Lz77Decoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Decompress a stream produced by [`Lz77Encoder::encode`].
    ///
    /// Triplets are replayed until the declared length is produced. A
    /// literal that would go past it is the encoder's placeholder and is
    /// dropped.
    ///
    /// [`Lz77Encoder::encode`]: crate::Lz77Encoder::encode
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = BitReader::new(input);
        let total = reader.read_bits(LENGTH_PREFIX_BITS)?;

        // Upper bound of what the remaining triplets can produce.
        let per_triplet = self.config.lookahead_size as u64 + 1;
        let bound = (reader.bits_remaining() / self.config.triplet_bits()).saturating_mul(per_triplet);
        let mut output = Vec::with_capacity(total.min(bound) as usize);

        let mut triplets = 0usize;
        while (output.len() as u64) < total {
            let triplet = Triplet::read_from(&mut reader, &self.config)?;
            self.apply(&triplet, &mut output, total)?;
            triplets += 1;
        }

        // Anything past the last triplet must be padding of the final byte.
        if reader.bits_remaining() >= self.config.triplet_bits() {
            let extra = Triplet::read_from(&mut reader, &self.config)?;
            return Err(LzkitError::length_overrun(
                total,
                total + extra.length as u64 + 1,
            ));
        }

        log::debug!(
            "lz77: {} triplets -> {} bytes (window {}, lookahead {})",
            triplets,
            output.len(),
            self.config.window_size,
            self.config.lookahead_size
        );

        Ok(output)
    }

    /// Replay one triplet onto `output`.
    fn apply(&self, triplet: &Triplet, output: &mut Vec<u8>, total: u64) -> Result<()> {
        let produced = output.len() as u64;
        let after_copy = produced + triplet.length as u64;
        if after_copy > total {
            return Err(LzkitError::length_overrun(total, after_copy));
        }

        if triplet.length > 0 {
            if triplet.offset > output.len() || triplet.offset > self.config.window_size {
                return Err(LzkitError::invalid_distance(triplet.offset, output.len()));
            }

            // Byte by byte: the source may overlap the bytes being appended.
            let start = output.len() - triplet.offset;
            for i in 0..triplet.length {
                let byte = output[start + i];
                output.push(byte);
            }
        }

        if after_copy < total {
            output.push(triplet.literal);
        }

        Ok(())
    }
}
