//! Error types for lzkit operations.
//!
//! Every codec reports failures through [`LzkitError`]. The variants fall
//! into a small taxonomy exposed by [`LzkitError::kind`]: malformed streams,
//! streams that end too early, values that do not fit their fixed field
//! width, invalid codec parameters, and I/O failures of the collaborators.

use std::io;
use thiserror::Error;

/// The main error type for lzkit operations.
#[derive(Debug, Error)]
pub enum LzkitError {
    /// I/O error from the file collaborators.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed stream header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Header declares more entries than it actually carries.
    #[error("Symbol count mismatch: header declares {declared}, found {parsed}")]
    SymbolCountMismatch {
        /// Count declared by the header.
        declared: usize,
        /// Entries actually parsed.
        parsed: usize,
    },

    /// Back-reference reaching before the start of the output.
    #[error("Invalid back-reference distance: {distance} exceeds produced output {available}")]
    InvalidDistance {
        /// The offending distance.
        distance: usize,
        /// Bytes produced so far.
        available: usize,
    },

    /// Code that is not (and cannot yet be) in the dictionary.
    #[error("Invalid code {code}: next assignable code is {next_code}")]
    InvalidCode {
        /// The offending code.
        code: u32,
        /// Next code the dictionary would assign.
        next_code: u32,
    },

    /// Stream decodes to more bytes than its declared length.
    #[error("Decoded data overruns declared length {declared} (reached {produced})")]
    LengthOverrun {
        /// Declared decoded length.
        declared: u64,
        /// Length the stream tried to reach.
        produced: u64,
    },

    /// Bit stream ended in the middle of a symbol, triplet or code.
    #[error("Truncated input at bit {bit_position}: {needed} more bits needed")]
    TruncatedInput {
        /// Bit position where the input ran out.
        bit_position: u64,
        /// Number of bits the read required.
        needed: u64,
    },

    /// Value that does not fit its fixed-width field.
    #[error("Value {value} does not fit the {bits}-bit {field} field")]
    CapacityExceeded {
        /// Name of the field.
        field: &'static str,
        /// The value that was rejected.
        value: u64,
        /// Width of the field in bits.
        bits: u32,
    },

    /// Codec parameters out of range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter problem.
        message: String,
    },
}

/// Result type alias for lzkit operations.
pub type Result<T> = std::result::Result<T, LzkitError>;

/// Broad category of an [`LzkitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed header or stream contents.
    Format,
    /// Input ended before a complete unit could be read.
    Truncated,
    /// A value could not be represented in its field width.
    Capacity,
    /// Codec parameters were rejected.
    Parameter,
    /// I/O failure outside the codecs.
    Io,
}

impl LzkitError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::InvalidHeader { .. }
            | Self::SymbolCountMismatch { .. }
            | Self::InvalidDistance { .. }
            | Self::InvalidCode { .. }
            | Self::LengthOverrun { .. } => ErrorKind::Format,
            Self::TruncatedInput { .. } => ErrorKind::Truncated,
            Self::CapacityExceeded { .. } => ErrorKind::Capacity,
            Self::InvalidParameter { .. } => ErrorKind::Parameter,
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a symbol count mismatch error.
    pub fn symbol_count_mismatch(declared: usize, parsed: usize) -> Self {
        Self::SymbolCountMismatch { declared, parsed }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, available: usize) -> Self {
        Self::InvalidDistance {
            distance,
            available,
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u32, next_code: u32) -> Self {
        Self::InvalidCode { code, next_code }
    }

    /// Create a length overrun error.
    pub fn length_overrun(declared: u64, produced: u64) -> Self {
        Self::LengthOverrun { declared, produced }
    }

    /// Create a truncated input error.
    pub fn truncated(bit_position: u64, needed: u64) -> Self {
        Self::TruncatedInput {
            bit_position,
            needed,
        }
    }

    /// Create a capacity error.
    pub fn capacity_exceeded(field: &'static str, value: u64, bits: u32) -> Self {
        Self::CapacityExceeded { field, value, bits }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LzkitError::symbol_count_mismatch(3, 2);
        assert!(err.to_string().contains("declares 3"));

        let err = LzkitError::capacity_exceeded("offset", 9, 3);
        assert!(err.to_string().contains("3-bit offset"));

        let err = LzkitError::truncated(17, 8);
        assert!(err.to_string().contains("bit 17"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(LzkitError::invalid_header("x").kind(), ErrorKind::Format);
        assert_eq!(LzkitError::invalid_code(600, 300).kind(), ErrorKind::Format);
        assert_eq!(LzkitError::invalid_distance(5, 2).kind(), ErrorKind::Format);
        assert_eq!(LzkitError::length_overrun(4, 6).kind(), ErrorKind::Format);
        assert_eq!(LzkitError::truncated(0, 1).kind(), ErrorKind::Truncated);
        assert_eq!(
            LzkitError::capacity_exceeded("length", 300, 8).kind(),
            ErrorKind::Capacity
        );
        assert_eq!(
            LzkitError::invalid_parameter("width").kind(),
            ErrorKind::Parameter
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: LzkitError = io_err.into();
        assert!(matches!(err, LzkitError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
