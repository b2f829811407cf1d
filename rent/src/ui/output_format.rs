// rent/src/ui/output_format.rs
//! Themed status messages and the end-of-run summary.
//!
//! Everything here writes to a caller-supplied writer (stderr in practice)
//! and only emits ANSI colour codes when `enable_colors` is set.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use rent_core::EntropyReport;

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme colour for `entry` to `text`, or returns it unchanged.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{}{}", prefix, msg), entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme_map, enable_colors)
}

/// Prints the one-block summary shown after a successful run.
pub fn print_summary<W: Write>(
    report: &EntropyReport,
    destination: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let label = |text: &str| styled(text, ThemeEntry::SummaryLabel, theme_map, enable_colors);
    let value = |text: String| styled(&text, ThemeEntry::SummaryValue, theme_map, enable_colors);

    writeln!(writer, "{}", styled("--- Entropy Summary ---", ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(writer, "{} {}", label("Source:     "), value(report.source.clone()))?;
    writeln!(writer, "{} {}", label("Bytes:      "), value(report.total_bytes.to_string()))?;
    writeln!(
        writer,
        "{} {}",
        label("Chunks:     "),
        value(format!("{} x {} bytes", report.points.len(), report.chunk_size))
    )?;
    if report.points.is_empty() {
        writeln!(writer, "{} {}", label("Entropy:    "), value("n/a (empty input)".to_string()))?;
    } else {
        writeln!(
            writer,
            "{} {}",
            label("Entropy:    "),
            value(format!(
                "min {:.4}  mean {:.4}  max {:.4}  std-dev {:.4}",
                report.stats.min, report.stats.mean, report.stats.max, report.stats.std_dev
            ))
        )?;
    }
    writeln!(writer, "{} {}", label("Plot:       "), value(destination.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use rent_core::{analyze_bytes, ChunkSize};

    #[test]
    fn plain_output_has_no_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\n");
    }

    #[test]
    fn coloured_output_wraps_text() {
        let theme = ThemeStyle::default_theme_map();
        let out = styled("hi", ThemeEntry::Error, &theme, true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("hi"));
    }

    #[test]
    fn summary_lists_counts_and_destination() {
        let theme = ThemeStyle::default_theme_map();
        let report = analyze_bytes("mem.bin", &[0u8; 600], ChunkSize::DEFAULT);
        let mut buf = Vec::new();
        print_summary(&report, "plot.svg", &mut buf, &theme, false).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("mem.bin"));
        assert!(text.contains("3 x 256 bytes"));
        assert!(text.contains("max 0.0000"));
        assert!(text.contains("plot.svg"));
    }

    #[test]
    fn summary_handles_empty_input() {
        let theme = ThemeStyle::default_theme_map();
        let report = analyze_bytes("empty.bin", &[], ChunkSize::DEFAULT);
        let mut buf = Vec::new();
        print_summary(&report, "terminal", &mut buf, &theme, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("n/a (empty input)"));
    }
}
