//! Symbol frequency tables.

use crate::symbol::Symbol;

/// Occurrence counts for the 256 byte values.
///
/// The end-of-stream sentinel is not stored: its count is always 1, whatever
/// the input, so it always gets a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Weight of the end-of-stream sentinel.
    pub const END_OF_STREAM_COUNT: u64 = 1;

    /// Count every byte of `data`.
    pub fn from_data(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Build a table from explicit byte counts.
    pub fn from_counts(counts: [u64; 256]) -> Self {
        Self { counts }
    }

    /// Get the count of a symbol.
    pub fn count(&self, symbol: Symbol) -> u64 {
        match symbol {
            Symbol::Byte(b) => self.counts[b as usize],
            Symbol::EndOfStream => Self::END_OF_STREAM_COUNT,
        }
    }

    /// Get the raw byte counts.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Number of distinct bytes present (the sentinel excluded).
    pub fn real_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Present symbols with their counts, bytes ascending, sentinel last.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.bytes()
            .map(|(b, c)| (Symbol::Byte(b), c))
            .chain(std::iter::once((
                Symbol::EndOfStream,
                Self::END_OF_STREAM_COUNT,
            )))
    }

    /// Present bytes with their counts, ascending.
    pub fn bytes(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::from_counts([0; 256])
    }
}
