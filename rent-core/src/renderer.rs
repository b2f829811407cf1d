// rent-core/src/renderer.rs
//! Defines the core SeriesRenderer trait.
//!
//! The `SeriesRenderer` trait is the seam between the analysis and whatever
//! presents its result (an image file, the terminal). The CLI picks one
//! implementation per run and never needs to know how it draws.
//!
//! License: MIT OR APACHE 2.0

use crate::analysis::EntropyReport;
use crate::errors::RentError;

/// A destination for an entropy-vs-offset plot.
pub trait SeriesRenderer {
    /// Draws the report's series and delivers it to the destination.
    ///
    /// Implementations must not write anything when they fail before drawing
    /// starts (for example on an unsupported output format).
    fn render(&self, report: &EntropyReport) -> Result<(), RentError>;

    /// Human-readable destination, used in status messages.
    fn describe(&self) -> String;
}
