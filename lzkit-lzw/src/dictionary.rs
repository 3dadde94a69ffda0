//! LZW dictionary (code table) management.

use crate::config::{LzwConfig, RESERVED_CODE, SEED_ENTRIES};
use lzkit_core::error::{LzkitError, Result};
use std::collections::HashMap;

/// LZW dictionary shared by the encoder and the decoder.
///
/// Both sides grow it through the same [`add`](Self::add) call, so the
/// capacity rule cannot drift between them. Every learned string is an
/// existing entry extended by one byte, which is also the key of the
/// reverse lookup used while encoding.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: (prefix code, next byte) -> code.
    children: HashMap<(u32, u8), u32>,
    /// Configuration.
    config: LzwConfig,
    /// Next available code.
    next_code: u32,
}

impl LzwDictionary {
    /// Create a new LZW dictionary with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;

        let mut dict = Self {
            table: Vec::with_capacity(Self::initial_capacity(&config)),
            children: HashMap::new(),
            config,
            next_code: 0,
        };

        dict.reset();
        Ok(dict)
    }

    /// Slots reserved up front: the seeds, the reserved code and at most
    /// [`INITIAL_LEARNED`](Self::INITIAL_LEARNED) learned strings. Wide
    /// codes grow the table on demand.
    fn initial_capacity(config: &LzwConfig) -> usize {
        let learned = config.max_code() + 1 - config.first_code();
        (config.first_code() + learned.min(Self::INITIAL_LEARNED)) as usize
    }

    /// Learned strings reserved at construction.
    const INITIAL_LEARNED: u32 = 4096;

    /// Reset the dictionary to its seeded state.
    pub fn reset(&mut self) {
        self.table.clear();
        self.children.clear();

        // Initialize with single-byte codes (0-255)
        for i in 0..SEED_ENTRIES {
            self.table.push(vec![i as u8]);
        }

        // Placeholder for the reserved code
        self.table.push(Vec::new());

        self.next_code = self.config.first_code();
    }

    /// Learn `string(prefix) + byte` under the next sequential code.
    ///
    /// Returns the assigned code, or `None` once the dictionary is full.
    pub fn add(&mut self, prefix: u32, byte: u8) -> Option<u32> {
        if self.is_full() {
            return None;
        }

        let mut string = self.table.get(prefix as usize)?.clone();
        string.push(byte);

        let code = self.next_code;
        self.table.push(string);
        self.children.insert((prefix, byte), code);
        self.next_code += 1;

        if self.is_full() {
            log::trace!("LZW dictionary full at {} entries", self.len());
        }

        Some(code)
    }

    /// Get the byte sequence for a code.
    pub fn get_string(&self, code: u32) -> Result<&[u8]> {
        if code == RESERVED_CODE || code >= self.next_code {
            return Err(LzkitError::invalid_code(code, self.next_code));
        }

        self.table
            .get(code as usize)
            .map(|v| v.as_slice())
            .ok_or_else(|| LzkitError::invalid_code(code, self.next_code))
    }

    /// Find the code for `string(prefix) + byte` (for encoding).
    pub fn find_code(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Check if the dictionary is full.
    pub fn is_full(&self) -> bool {
        self.next_code > self.config.max_code()
    }

    /// Number of live entries (seeds plus learned strings).
    pub fn len(&self) -> usize {
        (SEED_ENTRIES + self.next_code - self.config.first_code()) as usize
    }

    /// Always false: the seed entries are present from construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}
