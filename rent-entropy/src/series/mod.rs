// rent-entropy/src/series/mod.rs
//! Composes the chunker and the estimator into an entropy-vs-offset series.

extern crate alloc;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::chunker::{split_data, ChunkSize, Chunks};
use crate::entropy::normalized_entropy;
use crate::EntropyScore;

/// A single sample of the curve: where the chunk starts and how random it is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesPoint {
    pub offset: u64,
    pub entropy: EntropyScore,
}

/// Lazy iterator of [`SeriesPoint`]s in offset order.
#[derive(Debug, Clone)]
pub struct EntropySeries<'a> {
    chunks: Chunks<'a>,
}

impl Iterator for EntropySeries<'_> {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        Some(SeriesPoint {
            offset: chunk.offset,
            entropy: normalized_entropy(chunk.bytes),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for EntropySeries<'_> {}

impl FusedIterator for EntropySeries<'_> {}

/// Scores every chunk of `data` without materialising the result.
pub fn entropy_series(data: &[u8], chunk_size: ChunkSize) -> EntropySeries<'_> {
    EntropySeries {
        chunks: split_data(data, chunk_size),
    }
}

/// Collects the full series; this is what gets plotted.
pub fn collect_series(data: &[u8], chunk_size: ChunkSize) -> Vec<SeriesPoint> {
    entropy_series(data, chunk_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_zero_block_then_full_spectrum() {
        let mut data = vec![0u8; 256];
        data.extend(0..=255u8);

        let series = collect_series(&data, ChunkSize::DEFAULT);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0], SeriesPoint { offset: 0, entropy: 0.0 });
        assert_eq!(series[1].offset, 256);
        assert!((series[1].entropy - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_data_gives_empty_series() {
        assert!(collect_series(&[], ChunkSize::DEFAULT).is_empty());
    }

    #[test]
    fn test_short_final_chunk_keeps_regular_offset() {
        let data = vec![3u8; 10];
        let offsets: Vec<u64> = entropy_series(&data, ChunkSize::new(4).unwrap())
            .map(|p| p.offset)
            .collect();
        assert_eq!(offsets, [0, 4, 8]);
    }

    #[test]
    fn test_series_length_matches_chunk_count() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let size = ChunkSize::new(128).unwrap();
        assert_eq!(entropy_series(&data, size).len(), split_data(&data, size).len());
        assert_eq!(collect_series(&data, size).len(), (5000 + 127) / 128);
    }

    #[test]
    fn test_single_byte_chunks_are_all_zero() {
        let data: Vec<u8> = (0..32u8).collect();
        let series = collect_series(&data, ChunkSize::new(1).unwrap());
        assert_eq!(series.len(), 32);
        assert!(series.iter().all(|p| p.entropy == 0.0));
        assert_eq!(series[31].offset, 31);
    }
}
