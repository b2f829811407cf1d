// rent-core/src/renderers/terminal_renderer.rs
//! A `SeriesRenderer` that shows the chart on standard output as text.
//! License: MIT OR Apache-2.0

use std::io::{self, Write};

use log::debug;
use plotters::prelude::IntoDrawingArea;

use crate::analysis::EntropyReport;
use crate::config::{PlotConfig, TerminalConfig};
use crate::errors::RentError;
use crate::plot::{draw_entropy_chart, ChartLayout};
use crate::renderer::SeriesRenderer;
use crate::renderers::text_backend::TextBackend;

/// Displays plots on screen using a character-cell canvas.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    plot: PlotConfig,
    terminal: TerminalConfig,
}

impl TerminalRenderer {
    pub fn new(plot: PlotConfig, terminal: TerminalConfig) -> Self {
        Self { plot, terminal }
    }

    /// Draws into any writer; `render` uses locked stdout.
    pub fn render_to<W: Write>(&self, report: &EntropyReport, out: &mut W) -> Result<(), RentError> {
        let size = (self.terminal.width, self.terminal.height);
        debug!("Drawing {} points on a {}x{} text canvas", report.points.len(), size.0, size.1);
        let root = TextBackend::new(out, size).into_drawing_area();
        draw_entropy_chart(&root, report, &self.plot, ChartLayout::TEXT)
    }
}

impl SeriesRenderer for TerminalRenderer {
    fn render(&self, report: &EntropyReport) -> Result<(), RentError> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        self.render_to(report, &mut writer)
    }

    fn describe(&self) -> String {
        "terminal".to_string()
    }
}
