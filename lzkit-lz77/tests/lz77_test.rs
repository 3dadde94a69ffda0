//! LZ77 integration tests.

use lzkit_core::bitstream::BitReader;
use lzkit_core::{Codec, ErrorKind};
use lzkit_lz77::{LENGTH_PREFIX_BITS, Lz77Codec, Lz77Config, Lz77Encoder, Triplet, compress, decompress};

/// Deterministic pseudo-random bytes.
fn lcg_bytes(size: usize, alphabet: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push(((seed >> 32) % alphabet) as u8);
    }
    data
}

fn roundtrip(data: &[u8], config: Lz77Config) -> Vec<u8> {
    let compressed = compress(data, config).expect("compression failed");
    decompress(&compressed, config).expect("decompression failed")
}

#[test]
fn test_lz77_ababab() {
    let config = Lz77Config::new(8, 4).expect("valid config");
    assert_eq!(roundtrip(b"ABABAB", config), b"ABABAB");
}

#[test]
fn test_lz77_empty() {
    for config in [Lz77Config::DEFAULT, Lz77Config::LARGE] {
        assert!(roundtrip(b"", config).is_empty());
    }
}

#[test]
fn test_lz77_parameter_grid() {
    let original = lcg_bytes(3000, 4);
    for window in [1usize, 2, 7, 8, 100, 4096] {
        for lookahead in [1usize, 3, 4, 255, 1024] {
            let config = Lz77Config::new(window, lookahead).expect("valid config");
            assert_eq!(
                roundtrip(&original, config),
                original,
                "window {} lookahead {}",
                window,
                lookahead
            );
        }
    }
}

#[test]
fn test_lz77_match_at_end_of_input() {
    // Inputs whose last triplet is a match reaching the end, with and
    // without real zero bytes before it.
    let config = Lz77Config::new(16, 8).expect("valid config");
    for original in [
        b"abcabcabc".to_vec(),
        b"\0\0\0\0".to_vec(),
        b"x\0x\0x\0".to_vec(),
        b"abc\0".to_vec(),
    ] {
        assert_eq!(roundtrip(&original, config), original);
    }
}

#[test]
fn test_lz77_triplets_within_bounds() {
    let config = Lz77Config::new(64, 16).expect("valid config");
    let original = lcg_bytes(5000, 3);
    let compressed = compress(&original, config).expect("compression failed");

    let mut reader = BitReader::new(&compressed);
    let total = reader.read_bits(LENGTH_PREFIX_BITS).expect("length prefix");
    assert_eq!(total, original.len() as u64);

    let mut produced = 0usize;
    while (produced as u64) < total {
        let t = Triplet::read_from(&mut reader, &config).expect("triplet");
        assert!((1..=64).contains(&t.offset));
        assert!(t.length <= 16);
        if t.length > 0 {
            // Replay never reaches before the start of the output.
            assert!(t.offset <= produced);
        }
        produced += t.length + 1;
    }
}

#[test]
fn test_lz77_tokenize_matches_stream() {
    let config = Lz77Config::new(32, 8).expect("valid config");
    let encoder = Lz77Encoder::new(config).expect("valid config");
    let original = b"she sells sea shells on the sea shore";

    let triplets = encoder.tokenize(original);
    let compressed = encoder.encode(original).expect("compression failed");

    let mut reader = BitReader::new(&compressed);
    reader.read_bits(LENGTH_PREFIX_BITS).expect("length prefix");
    for t in &triplets {
        assert_eq!(Triplet::read_from(&mut reader, &config).expect("triplet"), *t);
    }
}

#[test]
fn test_lz77_repetitive_data_compresses() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original, Lz77Config::LARGE).expect("compression failed");
    assert!(compressed.len() < original.len() / 10);
    assert_eq!(
        decompress(&compressed, Lz77Config::LARGE).expect("decompression failed"),
        original
    );
}

#[test]
fn test_lz77_truncated_stream() {
    let config = Lz77Config::DEFAULT;
    let original = lcg_bytes(2000, 16);
    let compressed = compress(&original, config).expect("compression failed");

    let cut = &compressed[..compressed.len() / 2];
    assert_eq!(
        decompress(cut, config).unwrap_err().kind(),
        ErrorKind::Truncated
    );
}

#[test]
fn test_lz77_codec_box() {
    let codec: Box<dyn Codec> = Box::new(Lz77Codec::new(Lz77Config::new(256, 32).expect("valid config")));
    let data = lcg_bytes(4000, 8);
    assert!(codec.verify_roundtrip(&data).expect("codec failed").is_some());
}
