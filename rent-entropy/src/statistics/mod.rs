extern crate alloc;
use alloc::vec::Vec;
use libm::sqrt;

use crate::series::SeriesPoint;

/// Summary of the entropy values across a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStats {
    /// Number of samples summarised.
    pub count: usize,
    /// The arithmetic mean of the sampled entropy values.
    pub mean: f64,
    /// Population standard deviation of the samples.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Calculates count, mean, standard deviation and range for a slice of values.
///
/// An empty slice yields all-zero statistics.
pub fn compute_stats(values: &[f64]) -> SeriesStats {
    if values.is_empty() {
        return SeriesStats::default();
    }

    let len = values.len() as f64;

    let mean = values.iter().sum::<f64>() / len;

    // Variance is the average of the squared differences from the mean.
    let variance = values.iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>() / len;

    let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    SeriesStats {
        count: values.len(),
        mean,
        std_dev: sqrt(variance),
        min,
        max,
    }
}

/// Same as [`compute_stats`] over the entropy column of a series.
pub fn series_stats(points: &[SeriesPoint]) -> SeriesStats {
    let values: Vec<f64> = points.iter().map(|p| p.entropy).collect();
    compute_stats(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    // Using a small epsilon for floating point comparisons in tests
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, SeriesStats::default());
        assert_eq!(stats.count, 0);
    }

    #[test]
    fn test_compute_stats_single_value() {
        let stats = compute_stats(&[0.5]);
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 0.5);
        assert_eq!(stats.max, 0.5);
    }

    #[test]
    fn test_compute_stats_simple_range() {
        // Values: 2, 4, 4, 4, 5, 5, 7, 9
        // Mean: 5.0
        // Variance: (9+1+1+1+0+0+4+16)/8 = 32/8 = 4.0
        // Std Dev: 2.0
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = compute_stats(&values);

        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < EPSILON);
        assert!((stats.std_dev - 2.0).abs() < EPSILON);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_series_stats_uses_entropy_column() {
        let points = [
            SeriesPoint { offset: 0, entropy: 0.0 },
            SeriesPoint { offset: 256, entropy: 1.0 },
        ];
        let stats = series_stats(&points);
        assert_eq!(stats.count, 2);
        assert!((stats.mean - 0.5).abs() < EPSILON);
        assert!((stats.std_dev - 0.5).abs() < EPSILON);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 1.0);
    }
}
