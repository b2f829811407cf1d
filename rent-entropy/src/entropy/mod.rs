// rent-entropy/src/entropy/mod.rs
use libm::log2;

use crate::EntropyScore;

/// Upper bound of Shannon entropy for a byte-valued source, in bits.
pub const MAX_BITS_PER_BYTE: f64 = 8.0;

/// Tallies how often each byte value occurs in `data`.
pub fn byte_histogram(data: &[u8]) -> [usize; 256] {
    let mut frequencies = [0usize; 256];
    for &byte in data {
        frequencies[byte as usize] += 1;
    }
    frequencies
}

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns the entropy in bits per symbol, in `[0, 8]`.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let frequencies = byte_histogram(data);
    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &count in frequencies.iter() {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * log2(p);
        }
    }

    entropy
}

/// Shannon entropy scaled into `[0, 1]` by the 8-bit maximum.
///
/// An empty chunk scores `0.0`.
pub fn normalized_entropy(data: &[u8]) -> EntropyScore {
    shannon_entropy(data) / MAX_BITS_PER_BYTE
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec::Vec;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_entropy_empty() {
        assert_eq!(shannon_entropy(b""), 0.0);
        assert_eq!(normalized_entropy(b""), 0.0);
    }

    #[test]
    fn test_entropy_zero_randomness() {
        assert_eq!(normalized_entropy(b"aaaaa"), 0.0);
        assert_eq!(normalized_entropy(&[0u8; 4096]), 0.0);
        assert_eq!(normalized_entropy(&[0xff]), 0.0);
    }

    #[test]
    fn test_entropy_high_randomness() {
        let entropy = shannon_entropy(b"abcdefgh");
        assert!((entropy - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_every_byte_once_is_maximal() {
        let data: Vec<u8> = (0..=255u8).collect();
        assert!((normalized_entropy(&data) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_k_equally_frequent_values() {
        for k in [2usize, 4, 16, 100, 200] {
            // Each of the k values appears three times, interleaved.
            let data: Vec<u8> = (0..3).flat_map(|_| 0..k as u8).collect();
            let expected = log2(k as f64) / 8.0;
            let got = normalized_entropy(&data);
            assert!((got - expected).abs() < 1e-10, "k={}: got {}, expected {}", k, got, expected);
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward: Vec<u8> = (0..64u8).collect();
        let backward: Vec<u8> = (0..64u8).rev().collect();
        assert_eq!(normalized_entropy(&forward), normalized_entropy(&backward));
    }

    #[test]
    fn test_histogram_counts() {
        let hist = byte_histogram(&[1, 1, 2, 255]);
        assert_eq!(hist[1], 2);
        assert_eq!(hist[2], 1);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<usize>(), 4);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let skewed: Vec<u8> = (0..1000u32).map(|i| (i * i % 7) as u8).collect();
        let score = normalized_entropy(&skewed);
        assert!((0.0..=1.0).contains(&score));
    }
}
