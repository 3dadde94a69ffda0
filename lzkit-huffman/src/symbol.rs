//! Huffman alphabet: the 256 byte values plus the end-of-stream sentinel.

use std::fmt;

/// A leaf symbol of the prefix tree.
///
/// The derived ordering puts every byte before [`Symbol::EndOfStream`], which
/// is the order leaves enter the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A literal byte value.
    Byte(u8),
    /// Marks the end of the payload. Never appears in the header.
    EndOfStream,
}

impl Symbol {
    /// Size of the alphabet (256 bytes + sentinel).
    pub const COUNT: usize = 257;

    /// Dense index in `0..COUNT`; the sentinel takes 256.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Byte(b) => b as usize,
            Self::EndOfStream => 256,
        }
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Self::Byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(b) => write!(f, "byte 0x{:02X}", b),
            Self::EndOfStream => write!(f, "end-of-stream"),
        }
    }
}
