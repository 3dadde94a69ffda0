//! Frequency header.
//!
//! The header is a mixed text/binary segment:
//!
//! ```text
//! <count> (<byte><frequency> )*
//! ```
//!
//! `count` is the number of distinct bytes as decimal ASCII followed by one
//! space. Each entry is the raw byte itself, its frequency in decimal ASCII
//! and a space. Entries are written in ascending byte order. The sentinel is
//! never listed; both sides add it with weight 1.

use crate::frequency::FrequencyTable;
use lzkit_core::error::{LzkitError, Result};

/// Entry delimiter.
const SPACE: u8 = b' ';

/// Append the header for `table` to `out`.
pub fn write_header(table: &FrequencyTable, out: &mut Vec<u8>) {
    out.extend_from_slice(table.real_symbols().to_string().as_bytes());
    out.push(SPACE);

    for (byte, count) in table.bytes() {
        out.push(byte);
        out.extend_from_slice(count.to_string().as_bytes());
        out.push(SPACE);
    }
}

/// Parse a header from the start of `input`.
///
/// Returns the table and the offset of the first payload byte.
pub fn parse_header(input: &[u8]) -> Result<(FrequencyTable, usize)> {
    let mut parser = HeaderParser { input, pos: 0 };

    let declared = parser.decimal("symbol count")?;
    if declared > 256 {
        return Err(LzkitError::invalid_header(format!(
            "symbol count {} exceeds 256",
            declared
        )));
    }
    if !parser.space()? {
        return Err(LzkitError::invalid_header("missing space after symbol count"));
    }

    let mut counts = [0u64; 256];
    for parsed in 0..declared {
        let mismatch = || LzkitError::symbol_count_mismatch(declared as usize, parsed as usize);

        let byte = parser.byte().ok_or_else(mismatch)?;
        if parser.at_end() {
            return Err(mismatch());
        }

        let count = parser.decimal("frequency")?;
        if !parser.space().map_err(|_| mismatch())? {
            return Err(LzkitError::invalid_header(format!(
                "missing space after frequency of byte 0x{:02X}",
                byte
            )));
        }

        if count == 0 {
            return Err(LzkitError::invalid_header(format!(
                "zero frequency for byte 0x{:02X}",
                byte
            )));
        }
        if counts[byte as usize] != 0 {
            return Err(LzkitError::invalid_header(format!(
                "duplicate entry for byte 0x{:02X}",
                byte
            )));
        }
        counts[byte as usize] = count;
    }

    Ok((FrequencyTable::from_counts(counts), parser.pos))
}

/// Cursor over the header bytes.
struct HeaderParser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl HeaderParser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn byte(&mut self) -> Option<u8> {
        let byte = *self.input.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Consume a space. `Ok(false)` if another byte is there, `Err` at end.
    fn space(&mut self) -> Result<bool> {
        match self.input.get(self.pos) {
            Some(&SPACE) => {
                self.pos += 1;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(LzkitError::invalid_header("header ends early")),
        }
    }

    /// Consume a run of ASCII digits.
    fn decimal(&mut self, what: &str) -> Result<u64> {
        let start = self.pos;
        let mut value = 0u64;

        while let Some(&b) = self.input.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
                .ok_or_else(|| LzkitError::invalid_header(format!("{} overflows", what)))?;
            self.pos += 1;
        }

        if self.pos == start {
            return Err(LzkitError::invalid_header(format!("{} is not a number", what)));
        }
        Ok(value)
    }
}
