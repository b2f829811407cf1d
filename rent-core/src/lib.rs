// rent-core/src/lib.rs
//! # rent Core Library
//!
//! `rent-core` turns a file into an entropy-vs-offset report and draws that
//! report. The numeric work (chunking, Shannon entropy, statistics) lives in
//! `rent-entropy`; this crate adds the I/O around it: reading input, plot
//! configuration, JSON export and the pluggable [`SeriesRenderer`] trait.
//!
//! ## Modules
//!
//! * `analysis`: One-shot composition of input, series and statistics into an [`EntropyReport`].
//! * `config`: YAML plot and terminal settings with embedded defaults.
//! * `errors`: The [`RentError`] taxonomy.
//! * `input`: Reads the file under analysis into memory.
//! * `plot`: The chart routine shared by every renderer.
//! * `renderer`: Defines the [`SeriesRenderer`] trait.
//! * `renderers`: Image-file and terminal implementations of the trait.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use rent_core::{analyze_file, ChunkSize, ImageRenderer, RentConfig, SeriesRenderer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = RentConfig::load_default()?;
//!     let report = analyze_file("firmware.bin", ChunkSize::DEFAULT)?;
//!     ImageRenderer::new("firmware.svg", config.plot)?.render(&report)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Analysis and rendering return [`RentError`]; a missing input file is the
//! dedicated `InputNotFound` variant. Configuration loading uses `anyhow` and
//! attaches the offending path as context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod config;
pub mod errors;
pub mod input;
pub mod plot;
pub mod renderer;
pub mod renderers;

/// Re-exports the one-shot analysis API.
pub use analysis::{analyze_bytes, analyze_file, EntropyReport};

/// Re-exports configuration types.
pub use config::{PlotConfig, RentConfig, TerminalConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RentError;

pub use input::read_input;

/// Re-exports the renderer trait and its concrete implementations.
pub use renderer::SeriesRenderer;
pub use renderers::image_renderer::{ImageRenderer, OutputFormat};
pub use renderers::terminal_renderer::TerminalRenderer;

// Numeric types callers need without depending on rent-entropy directly.
pub use rent_entropy::{ChunkSize, ChunkSizeError, SeriesPoint, SeriesStats};
