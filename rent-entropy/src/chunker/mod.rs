// rent-entropy/src/chunker/mod.rs
//! Splits a byte buffer into consecutive, non-overlapping windows.

use core::fmt;
use core::iter::{Enumerate, FusedIterator};
use core::num::NonZeroUsize;
use core::slice;
use core::str::FromStr;

/// Window size used for entropy sampling, in bytes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// The default sampling window (256 bytes).
    pub const DEFAULT: ChunkSize = match NonZeroUsize::new(256) {
        Some(size) => ChunkSize(size),
        None => unreachable!(),
    };

    /// Returns `None` for a zero-sized window.
    pub const fn new(bytes: usize) -> Option<Self> {
        match NonZeroUsize::new(bytes) {
            Some(size) => Some(ChunkSize(size)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        ChunkSize(size)
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a textual chunk size is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkSizeError {
    /// The value is not an integer at all.
    NotAnInteger,
    /// Zero or negative.
    NonPositive(i128),
    /// Larger than the platform's address space.
    TooLarge(i128),
}

impl fmt::Display for ChunkSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkSizeError::NotAnInteger => write!(f, "chunk size must be a positive integer"),
            ChunkSizeError::NonPositive(value) => {
                write!(f, "chunk size must be a positive integer, got {}", value)
            }
            ChunkSizeError::TooLarge(value) => {
                write!(f, "chunk size {} exceeds the addressable range", value)
            }
        }
    }
}

impl core::error::Error for ChunkSizeError {}

impl FromStr for ChunkSize {
    type Err = ChunkSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i128 = s.trim().parse().map_err(|_| ChunkSizeError::NotAnInteger)?;
        if value <= 0 {
            return Err(ChunkSizeError::NonPositive(value));
        }
        let bytes = usize::try_from(value).map_err(|_| ChunkSizeError::TooLarge(value))?;
        ChunkSize::new(bytes).ok_or(ChunkSizeError::NonPositive(value))
    }
}

/// One window of the input, borrowed from the original buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position of this window in the sequence, starting at 0.
    pub index: usize,
    /// Byte offset of the first byte, always `index * chunk_size`.
    pub offset: u64,
    pub bytes: &'a [u8],
}

/// Lazy, single-pass sequence of [`Chunk`]s.
///
/// Every window is `chunk_size` long except possibly the last one, which
/// holds whatever remains. An empty buffer yields nothing.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    inner: Enumerate<slice::Chunks<'a, u8>>,
    size: ChunkSize,
}

impl<'a> Chunks<'a> {
    pub fn chunk_size(&self) -> ChunkSize {
        self.size
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, bytes) = self.inner.next()?;
        Some(Chunk {
            index,
            offset: index as u64 * self.size.get() as u64,
            bytes,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}

/// Partitions `data` into windows of `chunk_size` bytes, in order.
pub fn split_data(data: &[u8], chunk_size: ChunkSize) -> Chunks<'_> {
    Chunks {
        inner: data.chunks(chunk_size.get()).enumerate(),
        size: chunk_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec::Vec;

    fn size(n: usize) -> ChunkSize {
        ChunkSize::new(n).unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert_eq!(split_data(&[], size(256)).count(), 0);
    }

    #[test]
    fn test_chunk_count_is_ceiling() {
        let data = [7u8; 1000];
        for s in [1usize, 3, 7, 256, 999, 1000, 1001, 4096] {
            let chunks: Vec<Chunk<'_>> = split_data(&data, size(s)).collect();
            let expected = (data.len() + s - 1) / s;
            assert_eq!(chunks.len(), expected, "chunk size {}", s);

            let (last, body) = chunks.split_last().unwrap();
            assert!(body.iter().all(|c| c.bytes.len() == s));
            assert_eq!(last.bytes.len(), data.len() - s * (expected - 1));
        }
    }

    #[test]
    fn test_exact_division_has_no_empty_tail() {
        let data = [1u8; 512];
        let lens: Vec<usize> = split_data(&data, size(256)).map(|c| c.bytes.len()).collect();
        assert_eq!(lens, [256, 256]);
    }

    #[test]
    fn test_offsets_form_arithmetic_progression() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let offsets: Vec<u64> = split_data(&data, size(300)).map(|c| c.offset).collect();
        assert_eq!(offsets, [0, 300, 600, 900]);
    }

    #[test]
    fn test_chunks_cover_input_in_order() {
        let data: Vec<u8> = (0..100u8).collect();
        let rebuilt: Vec<u8> = split_data(&data, size(9))
            .flat_map(|c| c.bytes.iter().copied())
            .collect();
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_exact_size_and_fused() {
        let data = [0u8; 10];
        let mut chunks = split_data(&data, size(4));
        assert_eq!(chunks.len(), 3);
        chunks.next();
        assert_eq!(chunks.len(), 2);
        chunks.next();
        chunks.next();
        assert!(chunks.next().is_none());
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_parse_chunk_size() {
        assert_eq!("256".parse::<ChunkSize>(), Ok(size(256)));
        assert_eq!(" 1 ".parse::<ChunkSize>(), Ok(size(1)));
        assert_eq!("0".parse::<ChunkSize>(), Err(ChunkSizeError::NonPositive(0)));
        assert_eq!("-5".parse::<ChunkSize>(), Err(ChunkSizeError::NonPositive(-5)));
        assert_eq!("abc".parse::<ChunkSize>(), Err(ChunkSizeError::NotAnInteger));
        assert_eq!("1.5".parse::<ChunkSize>(), Err(ChunkSizeError::NotAnInteger));
    }

    #[test]
    fn test_zero_is_not_a_chunk_size() {
        assert!(ChunkSize::new(0).is_none());
        assert_eq!(ChunkSize::default().get(), 256);
    }
}
