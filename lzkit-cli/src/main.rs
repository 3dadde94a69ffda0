//! lzkit CLI - classical lossless codecs from the command line
//!
//! Compress, decompress and round-trip test files with the Huffman, LZ77
//! and LZW codecs.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{CodecArgs, cmd_compress, cmd_decompress, cmd_test};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lzkit")]
#[command(author, version, about = "Huffman, LZ77 and LZW compression")]
#[command(long_about = "
lzkit compresses whole files with one of three classical codecs.
Codec parameters are not stored in the output: pass the same
--method/--window/--lookahead/--width to decompress.

Examples:
  lzkit compress notes.txt notes.huf
  lzkit decompress notes.huf notes.txt
  lzkit compress image.bmp image.lz77 -m lz77 --window 16384 --lookahead 4096
  lzkit compress image.bmp image.lzw -m lzw --width 15
  lzkit test image.bmp -m lzw --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Output file
        output: PathBuf,

        #[command(flatten)]
        codec: CodecArgs,
    },

    /// Compress and decompress a file in memory and compare the result
    #[command(alias = "t")]
    Test {
        /// File to test
        input: PathBuf,

        #[command(flatten)]
        codec: CodecArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        log_level(cli.verbose, cli.quiet),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let progress = !cli.quiet;
    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
        } => cmd_compress(&input, &output, &codec, progress),
        Commands::Decompress {
            input,
            output,
            codec,
        } => cmd_decompress(&input, &output, &codec, progress),
        Commands::Test { input, codec, json } => cmd_test(&input, &codec, json, progress),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
