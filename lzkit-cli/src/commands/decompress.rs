//! Decompress command implementation.

use super::CodecArgs;
use crate::utils::{create_spinner, read_all, write_all};
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    codec: &CodecArgs,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = codec.build()?;
    let data = read_all(input)?;

    let pb = create_spinner(
        format!("Decompressing {} ({})", input.display(), codec.name()),
        progress,
    );
    let result = codec.decompress(&data);
    pb.finish_and_clear();

    // Nothing is written for a stream that fails to decode.
    let decompressed = result?;
    write_all(output, &decompressed)?;

    log::info!(
        "{}: {} -> {} ({} -> {} bytes)",
        codec.name(),
        input.display(),
        output.display(),
        data.len(),
        decompressed.len()
    );

    println!("Decompressed {} -> {}", input.display(), output.display());
    println!("  {} -> {} bytes", data.len(), decompressed.len());

    Ok(())
}
