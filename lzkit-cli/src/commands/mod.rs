//! Command implementations for the lzkit CLI.

pub mod compress;
pub mod decompress;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use test::cmd_test;

use clap::{Args, ValueEnum};
use lzkit_core::{Codec, Result};
use lzkit_huffman::HuffmanCodec;
use lzkit_lz77::{Lz77Codec, Lz77Config};
use lzkit_lzw::{LzwCodec, LzwConfig};
use serde::Serialize;

/// Compression method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Static Huffman coding
    #[default]
    Huffman,
    /// Sliding-window LZ77
    Lz77,
    /// Fixed-width LZW
    Lzw,
}

/// Codec selection and its out-of-band parameters.
#[derive(Debug, Clone, Copy, Args)]
pub struct CodecArgs {
    /// Compression method
    #[arg(short, long, value_enum, default_value = "huffman")]
    pub method: Method,

    /// LZ77 window size (search buffer)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.window_size)]
    pub window: usize,

    /// LZ77 lookahead size (longest match)
    #[arg(long, default_value_t = Lz77Config::DEFAULT.lookahead_size)]
    pub lookahead: usize,

    /// LZW code width in bits
    #[arg(long, default_value_t = LzwConfig::DEFAULT.code_width)]
    pub width: u8,
}

impl CodecArgs {
    /// Build the selected codec, validating its parameters.
    pub fn build(&self) -> Result<Box<dyn Codec>> {
        let codec: Box<dyn Codec> = match self.method {
            Method::Huffman => Box::new(HuffmanCodec::new()),
            Method::Lz77 => Box::new(Lz77Codec::new(Lz77Config::new(
                self.window,
                self.lookahead,
            )?)),
            Method::Lzw => Box::new(LzwCodec::new(LzwConfig::new(self.width)?)),
        };
        Ok(codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzkit_core::ErrorKind;

    fn args(method: Method) -> CodecArgs {
        CodecArgs {
            method,
            window: 64,
            lookahead: 8,
            width: 12,
        }
    }

    #[test]
    fn test_build_each_method() {
        for (method, name) in [
            (Method::Huffman, "huffman"),
            (Method::Lz77, "lz77"),
            (Method::Lzw, "lzw"),
        ] {
            let codec = args(method).build().unwrap();
            assert_eq!(codec.name(), name);
            assert!(codec.verify_roundtrip(b"banana bandana").unwrap().is_some());
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let mut bad = args(Method::Lzw);
        bad.width = 30;
        assert_eq!(bad.build().err().map(|e| e.kind()), Some(ErrorKind::Parameter));

        let mut bad = args(Method::Lz77);
        bad.window = 0;
        assert_eq!(bad.build().err().map(|e| e.kind()), Some(ErrorKind::Parameter));
    }

    #[test]
    fn test_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Method::Lz77).unwrap(), "\"lz77\"");
    }
}
