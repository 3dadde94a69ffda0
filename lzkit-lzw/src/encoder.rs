//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use lzkit_core::bitstream::BitWriter;
use lzkit_core::error::{LzkitError, Result};

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Encode data with LZW compression.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the seeded dictionary (codes 0-255)
    /// 2. Extend the current prefix one input byte at a time
    /// 3. When the extension is unknown, output the code of the prefix
    /// 4. Learn the extension (while there is room) and restart the
    ///    prefix from the byte just read
    /// 5. Output the code of the remaining prefix at the end
    ///
    /// Every code occupies exactly `code_width` bits. Empty input produces
    /// empty output.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.dict.reset();

        let mut writer = BitWriter::new();

        let Some((&first, rest)) = input.split_first() else {
            return Ok(writer.into_vec());
        };

        // Code of the current prefix
        let mut current = first as u32;

        for &byte in rest {
            match self.dict.find_code(current, byte) {
                // Prefix + byte is known - keep extending
                Some(code) => current = code,
                None => {
                    self.write_code(&mut writer, current)?;

                    // Ignored once the dictionary is full
                    let _ = self.dict.add(current, byte);

                    current = byte as u32;
                }
            }
        }

        // Output code for final prefix
        self.write_code(&mut writer, current)?;

        Ok(writer.into_vec())
    }

    /// Write one code, checking that it fits the configured width.
    fn write_code(&self, writer: &mut BitWriter, code: u32) -> Result<()> {
        let width = self.dict.config().code_width;
        if u64::from(code) >> width != 0 {
            return Err(LzkitError::capacity_exceeded(
                "code",
                code as u64,
                width as u32,
            ));
        }

        writer.write_bits(code as u64, width);
        Ok(())
    }

    /// Number of live dictionary entries after the last `encode` call.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::LzwDecoder;
    use lzkit_core::bitstream::BitReader;

    /// Read back every code of a stream.
    fn codes(data: &[u8], width: u8) -> Vec<u64> {
        let mut reader = BitReader::new(data);
        std::iter::from_fn(|| reader.read_bits_msb(width).ok()).collect()
    }

    #[test]
    fn test_encode_known_codes() {
        let config = LzwConfig::DEFAULT;
        let mut encoder = LzwEncoder::new(config).unwrap();

        // A, B, then "AB" (257) and "ABA" (259)
        let compressed = encoder.encode(b"ABABABA").unwrap();
        assert_eq!(
            codes(&compressed, config.code_width),
            vec![65, 66, 257, 259]
        );
    }

    #[test]
    fn test_encode_empty() {
        let mut encoder = LzwEncoder::new(LzwConfig::DEFAULT).unwrap();
        assert!(encoder.encode(b"").unwrap().is_empty());
        assert_eq!(encoder.dictionary_len(), 256);
    }

    #[test]
    fn test_encode_single_byte() {
        let config = LzwConfig::new(9).unwrap();
        let mut encoder = LzwEncoder::new(config).unwrap();

        // One 9-bit code: 'A' = 001000001
        let compressed = encoder.encode(b"A").unwrap();
        assert_eq!(compressed.len(), 2);
        assert_eq!(codes(&compressed, 9), vec![65]);
    }

    #[test]
    fn test_encode_resets_between_calls() {
        let mut encoder = LzwEncoder::new(LzwConfig::DEFAULT).unwrap();
        let first = encoder.encode(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
        let second = encoder.encode(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_codes_stay_within_width() {
        for width in [9u8, 10, 12] {
            let config = LzwConfig::new(width).unwrap();
            let mut encoder = LzwEncoder::new(config).unwrap();

            let original: Vec<u8> = (0..4000u32).map(|i| ((i * 7) % 13) as u8).collect();
            let compressed = encoder.encode(&original).unwrap();

            for code in codes(&compressed, width) {
                assert!(code <= config.max_code() as u64);
                assert_ne!(code, 256);
            }
            assert!(encoder.dictionary_len() <= config.capacity() as usize);
        }
    }

    #[test]
    fn test_encode_repeating() {
        let config = LzwConfig::DEFAULT;
        let mut encoder = LzwEncoder::new(config).unwrap();

        let original = vec![b'X'; 500];
        let compressed = encoder.encode(&original).unwrap();

        // Highly repetitive data should compress well
        assert!(compressed.len() < original.len() / 2);

        // Verify round-trip
        let mut decoder = LzwDecoder::new(config).unwrap();
        let decompressed = decoder.decode(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }
}
