//! LZ77 configuration (window and lookahead sizes, derived field widths).

use lzkit_core::error::{LzkitError, Result};

/// Width of the literal field in bits.
pub const LITERAL_BITS: u8 = 8;

/// Width of the decoded-length prefix in bits.
pub const LENGTH_PREFIX_BITS: u8 = 64;

/// Number of bits needed to represent `n` (0 for 0).
#[inline]
pub fn bit_length(n: u64) -> u8 {
    (u64::BITS - n.leading_zeros()) as u8
}

/// LZ77 configuration parameters.
///
/// Neither size is stored in the stream. Compressor and decompressor must
/// use the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    /// Search window size `S`: how far back a match may start.
    pub window_size: usize,
    /// Lookahead size `T`: the longest match.
    pub lookahead_size: usize,
}

impl Lz77Config {
    /// Largest supported window.
    pub const MAX_WINDOW_SIZE: usize = 1 << 24;

    /// Largest supported lookahead.
    pub const MAX_LOOKAHEAD_SIZE: usize = 1 << 16;

    /// 4 KiB window, 1 KiB lookahead.
    pub const DEFAULT: Self = Self {
        window_size: 4096,
        lookahead_size: 1024,
    };

    /// 16 KiB window, 4 KiB lookahead.
    pub const LARGE: Self = Self {
        window_size: 16 * 1024,
        lookahead_size: 4 * 1024,
    };

    /// Create a validated configuration.
    pub fn new(window_size: usize, lookahead_size: usize) -> Result<Self> {
        let config = Self {
            window_size,
            lookahead_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check both sizes against their supported ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(LzkitError::invalid_parameter(format!(
                "window size {} outside 1..={}",
                self.window_size,
                Self::MAX_WINDOW_SIZE
            )));
        }
        if !(1..=Self::MAX_LOOKAHEAD_SIZE).contains(&self.lookahead_size) {
            return Err(LzkitError::invalid_parameter(format!(
                "lookahead size {} outside 1..={}",
                self.lookahead_size,
                Self::MAX_LOOKAHEAD_SIZE
            )));
        }
        Ok(())
    }

    /// Width of the offset field: `ceil(log2(S))`.
    pub fn offset_bits(&self) -> u8 {
        bit_length(self.window_size as u64 - 1)
    }

    /// Width of the length field: `ceil(log2(T + 1))`.
    pub fn length_bits(&self) -> u8 {
        bit_length(self.lookahead_size as u64)
    }

    /// Total width of one triplet.
    pub fn triplet_bits(&self) -> u64 {
        LITERAL_BITS as u64 + self.length_bits() as u64 + self.offset_bits() as u64
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(7), 3);
        assert_eq!(bit_length(8), 4);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_field_widths() {
        let config = Lz77Config::DEFAULT;
        assert_eq!(config.offset_bits(), 12);
        assert_eq!(config.length_bits(), 11);
        assert_eq!(config.triplet_bits(), 31);

        let config = Lz77Config::LARGE;
        assert_eq!(config.offset_bits(), 14);
        assert_eq!(config.length_bits(), 13);

        let config = Lz77Config::new(8, 4).unwrap();
        assert_eq!(config.offset_bits(), 3);
        assert_eq!(config.length_bits(), 3);
    }

    #[test]
    fn test_window_of_one() {
        // The only possible offset is 1, which needs no bits.
        let config = Lz77Config::new(1, 1).unwrap();
        assert_eq!(config.offset_bits(), 0);
        assert_eq!(config.length_bits(), 1);
    }

    #[test]
    fn test_validation() {
        assert!(Lz77Config::new(0, 16).is_err());
        assert!(Lz77Config::new(16, 0).is_err());
        assert!(Lz77Config::new(Lz77Config::MAX_WINDOW_SIZE + 1, 16).is_err());
        assert!(Lz77Config::new(16, Lz77Config::MAX_LOOKAHEAD_SIZE + 1).is_err());
        assert!(Lz77Config::new(Lz77Config::MAX_WINDOW_SIZE, Lz77Config::MAX_LOOKAHEAD_SIZE).is_ok());
    }
}
