// rent-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod chunker;
pub mod series;
pub mod statistics;

pub use chunker::{split_data, Chunk, ChunkSize, ChunkSizeError, Chunks};
pub use entropy::{byte_histogram, normalized_entropy, shannon_entropy, MAX_BITS_PER_BYTE};
pub use series::{collect_series, entropy_series, EntropySeries, SeriesPoint};
pub use statistics::{compute_stats, series_stats, SeriesStats};

/// Common type definitions
pub type EntropyScore = f64;
