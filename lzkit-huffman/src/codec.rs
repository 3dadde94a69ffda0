//! Huffman compression and decompression.

use crate::frequency::FrequencyTable;
use crate::header::{parse_header, write_header};
use crate::symbol::Symbol;
use crate::tree::{Node, PrefixTree};
use lzkit_core::bitstream::{BitReader, BitWriter};
use lzkit_core::error::{LzkitError, Result};
use lzkit_core::traits::Codec;

/// Static Huffman codec.
///
/// The output is the frequency header followed by the code of every input
/// byte and the end-of-stream code, packed with [`BitWriter::write_bits`].
/// There is no payload length; decoding stops at the end-of-stream leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Create a new Huffman codec.
    pub fn new() -> Self {
        Self
    }

    /// Recover the frequency table stored in a compressed stream.
    pub fn read_frequencies(input: &[u8]) -> Result<FrequencyTable> {
        if input.is_empty() {
            return Ok(FrequencyTable::default());
        }
        parse_header(input).map(|(table, _)| table)
    }

    /// Compress `input`.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let table = FrequencyTable::from_data(input);
        let tree = PrefixTree::build(&table)?;
        let codes = tree.codes()?;

        let mut header = Vec::with_capacity(2 + table.real_symbols() * 8);
        write_header(&table, &mut header);
        let header_len = header.len();

        let mut writer = BitWriter::with_prefix(header);

        // Codes per byte value, looked up once.
        let mut lookup = [None; 256];
        for (byte, _) in table.bytes() {
            lookup[byte as usize] = Some(codes.get(Symbol::Byte(byte))?);
        }

        for &byte in input {
            let code = lookup[byte as usize]
                .ok_or_else(|| LzkitError::invalid_header(format!("no code for byte 0x{:02X}", byte)))?;
            writer.write_bits(code.bits, code.len);
        }

        let end = codes.get(Symbol::EndOfStream)?;
        writer.write_bits(end.bits, end.len);

        log::debug!(
            "huffman: {} symbols, header {} bytes, payload {} bits",
            table.real_symbols(),
            header_len,
            writer.bits_written()
        );

        Ok(writer.into_vec())
    }

    /// Decompress `input`.
    ///
    /// An empty buffer decodes to an empty output.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let (table, offset) = parse_header(input)?;
        let tree = PrefixTree::build(&table)?;

        let total: u64 = table.bytes().map(|(_, c)| c).sum();
        let mut output = Vec::with_capacity(total.min(input.len() as u64 * 8) as usize);

        let mut reader = BitReader::new(&input[offset..]);
        let root = tree.root_index();
        let mut index = root;

        loop {
            match tree.node(index) {
                Some(Node::Leaf {
                    symbol: Symbol::Byte(b),
                    ..
                }) => {
                    output.push(*b);
                    index = root;
                }
                Some(Node::Leaf {
                    symbol: Symbol::EndOfStream,
                    ..
                }) => break,
                Some(Node::Internal { zero, one, .. }) => {
                    let bit = reader
                        .read_bit()
                        .ok_or_else(|| LzkitError::truncated(reader.bit_position(), 1))?;
                    index = if bit { *one } else { *zero };
                }
                None => {
                    return Err(LzkitError::invalid_header(format!(
                        "tree node {} out of range",
                        index
                    )));
                }
            }
        }

        log::debug!(
            "huffman: decoded {} bytes from {} payload bits",
            output.len(),
            reader.bit_position()
        );

        Ok(output)
    }
}

impl Codec for HuffmanCodec {
    fn name(&self) -> &'static str {
        "huffman"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode(input)
    }
}
