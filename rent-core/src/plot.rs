// rent-core/src/plot.rs
//! The entropy chart, drawn once for any plotters backend.

use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::analysis::EntropyReport;
use crate::config::PlotConfig;
use crate::errors::RentError;

/// Spacing around the plotting area, in backend units (pixels or cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub tick_mark_size: u32,
}

impl ChartLayout {
    /// Proportions for raster and vector images.
    pub const IMAGE: ChartLayout = ChartLayout {
        margin: 20,
        x_label_area: 50,
        y_label_area: 70,
        x_ticks: 10,
        y_ticks: 10,
        tick_mark_size: 5,
    };

    /// Proportions for a character grid, where one unit is one cell.
    pub const TEXT: ChartLayout = ChartLayout {
        margin: 1,
        x_label_area: 3,
        y_label_area: 9,
        x_ticks: 5,
        y_ticks: 5,
        tick_mark_size: 1,
    };
}

/// Family every chart text style asks for.
pub const FONT_FAMILY: &str = "sans-serif";

static EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Registers the embedded font with plotters once per process.
///
/// Raster and SVG backends measure text through the registered font, so this
/// runs before any chart is drawn.
pub fn ensure_font_registered() -> Result<(), RentError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED.get_or_init(|| {
        let ok = register_font(FONT_FAMILY, FontStyle::Normal, EMBEDDED_FONT).is_ok();
        log::debug!("Embedded chart font registered: {}", ok);
        ok
    });
    if ok {
        Ok(())
    } else {
        Err(RentError::Plot("embedded chart font could not be loaded".to_string()))
    }
}

pub(crate) fn plot_err<E: std::fmt::Display>(err: E) -> RentError {
    RentError::Plot(err.to_string())
}

/// Draws `report` as a single line series onto `root` and presents it.
pub fn draw_entropy_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &EntropyReport,
    config: &PlotConfig,
    layout: ChartLayout,
) -> Result<(), RentError> {
    ensure_font_registered()?;
    root.fill(&WHITE).map_err(plot_err)?;

    let [y_min, y_max] = config.y_range;
    let x_max = report.x_extent() as f64;
    let [r, g, b] = config.line_color;
    let line_color = RGBColor(r, g, b);

    let mut chart = ChartBuilder::on(root)
        .margin(layout.margin)
        .x_label_area_size(layout.x_label_area)
        .y_label_area_size(layout.y_label_area)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .set_all_tick_mark_size(layout.tick_mark_size)
        .x_labels(layout.x_ticks)
        .y_labels(layout.y_ticks)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .axis_desc_style((FONT_FAMILY, config.label_font_size))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            report.points.iter().map(|p| (p.offset as f64, p.entropy)),
            &line_color,
        ))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
