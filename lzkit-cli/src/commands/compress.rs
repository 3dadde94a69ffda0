//! Compress command implementation.

use super::CodecArgs;
use crate::utils::{create_spinner, ratio_percent, read_all, write_all};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    codec: &CodecArgs,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = codec.build()?;
    let data = read_all(input)?;

    let pb = create_spinner(
        format!("Compressing {} ({})", input.display(), codec.name()),
        progress,
    );
    let result = codec.compress(&data);
    pb.finish_and_clear();
    let compressed = result?;

    write_all(output, &compressed)?;

    log::info!(
        "{}: {} -> {} ({} -> {} bytes)",
        codec.name(),
        input.display(),
        output.display(),
        data.len(),
        compressed.len()
    );

    println!("Compressed {} -> {}", input.display(), output.display());
    println!(
        "  {} -> {} bytes ({:.1}%)",
        data.len(),
        compressed.len(),
        ratio_percent(data.len(), compressed.len())
    );

    Ok(())
}
