//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use lzkit_core::Result;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Load a whole file into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Write a whole buffer to a file, replacing it.
pub fn write_all(path: &Path, data: &[u8]) -> Result<()> {
    Ok(fs::write(path, data)?)
}

/// Exact byte-for-byte comparison.
pub fn contents_match(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// Offset of the first differing byte, or of the shorter buffer's end.
pub fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    if contents_match(a, b) {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .position(|(x, y)| x != y)
            .unwrap_or_else(|| a.len().min(b.len())),
    )
}

/// Compressed size as a percentage of the original size.
pub fn ratio_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    compressed as f64 / original as f64 * 100.0
}

/// Create a spinner for a long-running transform.
pub fn create_spinner(message: String, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} [{elapsed}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_match() {
        assert!(contents_match(b"", b""));
        assert!(contents_match(b"abc", b"abc"));
        assert!(!contents_match(b"abc", b"abd"));
        assert!(!contents_match(b"abc", b"ab"));
    }

    #[test]
    fn test_first_mismatch() {
        assert_eq!(first_mismatch(b"abc", b"abc"), None);
        assert_eq!(first_mismatch(b"abc", b"axc"), Some(1));
        assert_eq!(first_mismatch(b"abc", b"ab"), Some(2));
        assert_eq!(first_mismatch(b"", b"a"), Some(0));
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(0, 5), 0.0);
        assert_eq!(ratio_percent(200, 50), 25.0);
    }

    #[test]
    fn test_read_write_all() {
        let path = std::env::temp_dir().join(format!("lzkit_utils_{}.bin", std::process::id()));
        write_all(&path, b"\x00\x01\xFFdata").unwrap();
        assert_eq!(read_all(&path).unwrap(), b"\x00\x01\xFFdata");
        fs::remove_file(&path).unwrap();

        let err = read_all(&path).unwrap_err();
        assert_eq!(err.kind(), lzkit_core::ErrorKind::Io);
    }
}
