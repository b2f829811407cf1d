// rent-core/src/renderers/image_renderer.rs
//! A `SeriesRenderer` that saves the chart to an image file whose format
//! follows the output path's extension.
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::prelude::*;

use crate::analysis::EntropyReport;
use crate::config::PlotConfig;
use crate::errors::RentError;
use crate::plot::{draw_entropy_chart, ChartLayout};
use crate::renderer::SeriesRenderer;

/// Image encodings reachable through the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Bmp,
    Jpeg,
}

impl OutputFormat {
    /// Picks the format from the (case-insensitive) file extension.
    pub fn from_path(path: &Path) -> Result<Self, RentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "bmp" => Ok(OutputFormat::Bmp),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(RentError::UnsupportedFormat(ext)),
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(self, OutputFormat::Svg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Jpeg => "jpeg",
        };
        f.write_str(name)
    }
}

/// Saves plots to a file.
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    path: PathBuf,
    format: OutputFormat,
    config: PlotConfig,
}

impl ImageRenderer {
    /// Fails with [`RentError::UnsupportedFormat`] before touching the filesystem.
    pub fn new(path: impl Into<PathBuf>, config: PlotConfig) -> Result<Self, RentError> {
        let path = path.into();
        let format = OutputFormat::from_path(&path)?;
        debug!("Image renderer for {} ({})", path.display(), format);
        Ok(Self { path, format, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl SeriesRenderer for ImageRenderer {
    fn render(&self, report: &EntropyReport) -> Result<(), RentError> {
        let size = (self.config.width, self.config.height);
        info!("Saving {} plot to {}", self.format, self.path.display());

        if self.format.is_vector() {
            let root = SVGBackend::new(&self.path, size).into_drawing_area();
            draw_entropy_chart(&root, report, &self.config, ChartLayout::IMAGE)
        } else {
            // The bitmap encoder picks PNG/BMP/JPEG from the extension.
            let root = BitMapBackend::new(&self.path, size).into_drawing_area();
            draw_entropy_chart(&root, report, &self.config, ChartLayout::IMAGE)
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
