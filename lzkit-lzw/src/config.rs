//! LZW configuration (code width and the derived dictionary limits).

use lzkit_core::error::{LzkitError, Result};

/// Number of pre-seeded single-byte entries (codes 0-255).
pub const SEED_ENTRIES: u32 = 256;

/// Code kept out of the dictionary (never emitted).
pub const RESERVED_CODE: u32 = 256;

/// LZW configuration parameters.
///
/// The code width is not stored in the stream; compressor and decompressor
/// must agree on it out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Width of every emitted code, in bits.
    pub code_width: u8,
}

impl LzwConfig {
    /// Smallest supported code width.
    ///
    /// Below 9 bits the capacity would be smaller than the 256 seed entries.
    pub const MIN_CODE_WIDTH: u8 = 9;

    /// Largest supported code width.
    pub const MAX_CODE_WIDTH: u8 = 24;

    /// Default configuration: 15-bit codes.
    pub const DEFAULT: Self = Self { code_width: 15 };

    /// Create a validated configuration.
    pub fn new(code_width: u8) -> Result<Self> {
        let config = Self { code_width };
        config.validate()?;
        Ok(config)
    }

    /// Check that the code width is within the supported range.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_CODE_WIDTH..=Self::MAX_CODE_WIDTH).contains(&self.code_width) {
            return Err(LzkitError::invalid_parameter(format!(
                "code width {} outside {}..={}",
                self.code_width,
                Self::MIN_CODE_WIDTH,
                Self::MAX_CODE_WIDTH
            )));
        }
        Ok(())
    }

    /// Maximum number of live dictionary entries: `2^(W-1)`.
    ///
    /// Only half of the `W`-bit code space is used. Existing streams were
    /// produced with this limit, so changing it would change the format.
    pub fn capacity(&self) -> u32 {
        1 << (self.code_width - 1)
    }

    /// Get the first code assigned to a learned string.
    pub fn first_code(&self) -> u32 {
        RESERVED_CODE + 1
    }

    /// Get the highest code that can ever be assigned.
    ///
    /// Codes run from 257 up to and including the capacity, which leaves
    /// exactly `capacity()` live entries once the reserved code is skipped.
    pub fn max_code(&self) -> u32 {
        self.capacity()
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
