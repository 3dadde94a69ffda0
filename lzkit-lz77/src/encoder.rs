//! LZ77 encoder.
//!
//! # Algorithm
//!
//! At each position the encoder scans the window `[pos - S, pos)` from the
//! oldest byte to the newest and keeps the longest match against the next
//! `T` bytes. A later candidate replaces the current best only when it is
//! strictly longer, so among equal lengths the oldest (largest offset) wins.
//! Matches may run past `pos` into the bytes they are copying.
//!
//! Every step emits one triplet and advances by `length + 1`. If the match
//! reaches the end of the input, the literal is a placeholder `0` that the
//! decoder drops because the declared length is already reached.

use crate::config::{LENGTH_PREFIX_BITS, Lz77Config};
use crate::triplet::Triplet;
use lzkit_core::bitstream::BitWriter;
use lzkit_core::error::Result;

/// LZ77 encoder.
#[derive(Debug, Clone)]
pub struct Lz77Encoder {
    config: Lz77Config,
}

impl Lz77Encoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: Lz77Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Find the triplet for position `pos` of `data`.
    ///
    /// At or past the end of `data` there is nothing to match and the result
    /// is a placeholder literal `0`.
    pub fn find_match(&self, data: &[u8], pos: usize) -> Triplet {
        let max_len = data
            .len()
            .saturating_sub(pos)
            .min(self.config.lookahead_size);
        if max_len == 0 {
            return Triplet::literal(0);
        }

        let window_start = pos.saturating_sub(self.config.window_size);
        let lookahead = &data[pos..pos + max_len];

        let mut best_len = 0;
        let mut best_offset = 1;

        for candidate in window_start..pos {
            if data[candidate] != lookahead[0] {
                continue;
            }

            let len = data[candidate..]
                .iter()
                .zip(lookahead)
                .take_while(|(a, b)| a == b)
                .count();

            if len > best_len {
                best_len = len;
                best_offset = pos - candidate;

                // Nothing later can be strictly longer.
                if len == max_len {
                    break;
                }
            }
        }

        Triplet {
            offset: best_offset,
            length: best_len,
            literal: data.get(pos + best_len).copied().unwrap_or(0),
        }
    }

    /// Split `data` into triplets.
    pub fn tokenize(&self, data: &[u8]) -> Vec<Triplet> {
        let mut triplets = Vec::new();
        let mut pos = 0;

        while pos < data.len() {
            let triplet = self.find_match(data, pos);
            pos += triplet.length + 1;
            triplets.push(triplet);
        }

        triplets
    }

    /// Compress `data`: the decoded length, then the packed triplets.
    ///
    /// Empty input produces empty output.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let triplets = self.tokenize(data);

        let mut writer = BitWriter::new();
        writer.write_bits_lsb(data.len() as u64, LENGTH_PREFIX_BITS);
        for triplet in &triplets {
            triplet.write_to(&mut writer, &self.config)?;
        }

        log::debug!(
            "lz77: {} bytes -> {} triplets of {} bits (window {}, lookahead {})",
            data.len(),
            triplets.len(),
            self.config.triplet_bits(),
            self.config.window_size,
            self.config.lookahead_size
        );

        Ok(writer.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(window: usize, lookahead: usize) -> Lz77Encoder {
        Lz77Encoder::new(Lz77Config::new(window, lookahead).unwrap()).unwrap()
    }

    #[test]
    fn test_tokenize_ababab() {
        let triplets = encoder(8, 4).tokenize(b"ABABAB");
        assert_eq!(
            triplets,
            vec![
                Triplet::literal(b'A'),
                Triplet::literal(b'B'),
                Triplet {
                    offset: 2,
                    length: 4,
                    literal: 0
                },
            ]
        );
    }

    #[test]
    fn test_earliest_candidate_wins_ties() {
        let triplets = encoder(16, 2).tokenize(b"ABxABxAB");
        assert_eq!(
            triplets[3],
            Triplet {
                offset: 3,
                length: 2,
                literal: b'x'
            }
        );
        // Both "AB"s at 0 and 3 match at position 6; the one six bytes back
        // is scanned first.
        assert_eq!(
            triplets[4],
            Triplet {
                offset: 6,
                length: 2,
                literal: 0
            }
        );
    }

    #[test]
    fn test_match_limited_by_lookahead() {
        let triplets = encoder(4096, 3).tokenize(&[b'z'; 10]);
        assert_eq!(triplets[0], Triplet::literal(b'z'));
        for t in &triplets[1..] {
            assert!(t.length <= 3);
        }
        assert_eq!(
            triplets[1],
            Triplet {
                offset: 1,
                length: 3,
                literal: b'z'
            }
        );
    }

    #[test]
    fn test_window_limit() {
        // The repeat is 5 bytes back; a 4-byte window cannot see it.
        let triplets = encoder(4, 8).tokenize(b"abcdeab");
        assert!(triplets.iter().all(|t| t.length == 0));

        let triplets = encoder(5, 8).tokenize(b"abcdeab");
        assert_eq!(
            triplets[5],
            Triplet {
                offset: 5,
                length: 2,
                literal: 0
            }
        );
    }

    #[test]
    fn test_find_match_at_end() {
        let encoder = encoder(8, 4);
        assert_eq!(encoder.find_match(b"ab", 2), Triplet::literal(0));
        assert_eq!(encoder.find_match(b"ab", 5), Triplet::literal(0));
        assert_eq!(encoder.find_match(b"", 0), Triplet::literal(0));
    }

    #[test]
    fn test_encode_empty() {
        assert!(encoder(8, 4).encode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_encode_length_prefix() {
        let data = encoder(8, 4).encode(b"ABABAB").unwrap();
        assert_eq!(&data[..8], &6u64.to_le_bytes());

        // Three 14-bit triplets after the prefix.
        assert_eq!(data.len(), 8 + 6);
    }
}
