// rent-core/src/analysis.rs
//! One-shot, non-interactive analysis: file in, entropy report out.

use std::io::Write;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use rent_entropy::{collect_series, series_stats, ChunkSize, SeriesPoint, SeriesStats};

use crate::errors::RentError;
use crate::input::read_input;

/// Everything known about one run: the plotted series plus its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// Display name of the analysed input, usually its path.
    pub source: String,
    pub total_bytes: u64,
    pub chunk_size: usize,
    pub points: Vec<SeriesPoint>,
    pub stats: SeriesStats,
}

impl EntropyReport {
    /// Right edge of the x axis.
    ///
    /// The last offset when the series spans more than one chunk, otherwise
    /// the chunk size so the axis never collapses to a single value.
    pub fn x_extent(&self) -> u64 {
        match self.points.last() {
            Some(last) if last.offset > 0 => last.offset,
            _ => self.chunk_size as u64,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), RentError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Builds a report for bytes already in memory.
pub fn analyze_bytes(source: impl Into<String>, data: &[u8], chunk_size: ChunkSize) -> EntropyReport {
    let source = source.into();
    let points = collect_series(data, chunk_size);
    let stats = series_stats(&points);

    debug!(
        "Scored {} chunks of {} bytes from {} (mean entropy {:.4})",
        points.len(),
        chunk_size,
        source,
        stats.mean
    );

    EntropyReport {
        source,
        total_bytes: data.len() as u64,
        chunk_size: chunk_size.get(),
        points,
        stats,
    }
}

/// Reads `path` and builds its report.
pub fn analyze_file<P: AsRef<Path>>(path: P, chunk_size: ChunkSize) -> Result<EntropyReport, RentError> {
    let path = path.as_ref();
    info!("Analyzing {} with {}-byte chunks.", path.display(), chunk_size);
    let data = read_input(path)?;
    Ok(analyze_bytes(path.display().to_string(), &data, chunk_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_extent_never_collapses() {
        let empty = analyze_bytes("empty", &[], ChunkSize::DEFAULT);
        assert_eq!(empty.x_extent(), 256);

        let single = analyze_bytes("single", &[1, 2, 3], ChunkSize::DEFAULT);
        assert_eq!(single.points.len(), 1);
        assert_eq!(single.x_extent(), 256);

        let three = analyze_bytes("three", &[0u8; 600], ChunkSize::DEFAULT);
        assert_eq!(three.x_extent(), 512);
    }

    #[test]
    fn report_json_has_expected_shape() {
        let report = analyze_bytes("mem", &[0u8; 4], ChunkSize::new(2).unwrap());
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["source"], "mem");
        assert_eq!(value["total_bytes"], 4);
        assert_eq!(value["chunk_size"], 2);
        assert_eq!(value["points"][1]["offset"], 2);
        assert_eq!(value["stats"]["count"], 2);
    }
}
