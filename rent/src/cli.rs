// rent/src/cli.rs
//! This file defines the command-line interface (CLI) for the rent application.

use clap::Parser;
use rent_core::ChunkSize;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rent",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tiny program that plots shannon entropy of a given file",
    long_about = "rent splits a file into fixed-size chunks, computes the Shannon entropy of each chunk (normalized to [0, 1]) and plots entropy against offset. High plateaus usually mean compressed or encrypted data; flat zero runs mean padding. Without --out the plot is drawn in the terminal.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Input file to process.
    #[arg(long = "in", value_name = "FILE", help = "Input file to process.")]
    pub input: PathBuf,

    /// Save the plot to this file instead of displaying it.
    #[arg(long = "out", value_name = "FILE", help = "Output file to save results (svg, png, bmp, jpg).")]
    pub output: Option<PathBuf>,

    /// Chunk size in bytes.
    #[arg(
        long = "chk",
        value_name = "BYTES",
        default_value = "256",
        allow_negative_numbers = true,
        help = "Chunk size in bytes (positive integer)."
    )]
    pub chunk_size: ChunkSize,

    /// Path to a custom plot configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom plot configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Export the entropy report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the entropy series and statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the entropy report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Print the entropy series as JSON to stdout instead of drawing it there.")]
    pub json_stdout: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress the run summary and all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}
