//! Plot command implementation: analyse one file and render its entropy curve.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use rent_core::{
    analyze_file, ChunkSize, EntropyReport, ImageRenderer, RentConfig, SeriesRenderer,
    TerminalRenderer,
};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Options for the ergonomic run_plot_opts API
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub input: PathBuf,
    pub output_path: Option<PathBuf>,
    pub chunk_size: ChunkSize,
    pub config_path: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// The main operation runner for the rent CLI.
///
/// A missing input surfaces as `rent_core::RentError::InputNotFound` inside
/// the returned error, before any renderer is created.
pub fn run_plot_opts(opts: &PlotOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting rent operation.");

    let config = RentConfig::resolve(opts.config_path.as_deref())?;
    let report = analyze_file(&opts.input, opts.chunk_size)?;

    debug!(
        "Series ready: {} points over {} bytes",
        report.points.len(),
        report.total_bytes
    );

    let renderer = select_renderer(opts, &config)?;

    // JSON is written only once the plot succeeded.
    let destination = match &renderer {
        Some(r) => {
            r.render(&report)
                .with_context(|| format!("Failed to render plot to {}", r.describe()))?;
            r.describe()
        }
        None => "none (JSON on stdout)".to_string(),
    };
    handle_json_output(&report, opts)?;

    if let Some(path) = &opts.json_file {
        if !opts.quiet {
            info_msg(format!("JSON report written to {}", path.display()), theme_map);
        }
    }

    if opts.output_path.is_some() && !opts.quiet {
        success_msg(format!("Plot saved to {}", destination), theme_map);
    }
    if report.points.is_empty() && !opts.quiet {
        warn_msg("Input is empty; the plot has no data points.", theme_map);
    }

    handle_summary(&report, &destination, opts, theme_map)?;

    info!("rent operation completed.");
    Ok(())
}

/// `--out` saves to a file; otherwise the chart goes to the terminal unless
/// stdout is already taken by JSON. Runs before anything is written, so an
/// unsupported extension leaves no files behind.
fn select_renderer(opts: &PlotOptions, config: &RentConfig) -> Result<Option<Box<dyn SeriesRenderer>>> {
    if let Some(path) = &opts.output_path {
        let renderer = ImageRenderer::new(path, config.plot.clone())?;
        return Ok(Some(Box::new(renderer)));
    }
    if opts.json_stdout {
        return Ok(None);
    }
    Ok(Some(Box::new(TerminalRenderer::new(config.plot.clone(), config.terminal.clone()))))
}

fn handle_json_output(report: &EntropyReport, opts: &PlotOptions) -> Result<()> {
    if let Some(path) = &opts.json_file {
        debug!("Writing JSON report to {}", path.display());
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
        let mut writer = io::BufWriter::new(file);
        report.write_json(&mut writer)
            .and_then(|()| writer.flush().map_err(Into::into))
            .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
    }

    if opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        report.write_json(&mut writer)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn handle_summary(
    report: &EntropyReport,
    destination: &str,
    opts: &PlotOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        output_format::print_summary(report, destination, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use rent_core::RentError;
    use test_log::test;

    fn options(input: PathBuf) -> PlotOptions {
        PlotOptions {
            input,
            output_path: None,
            chunk_size: ChunkSize::DEFAULT,
            config_path: None,
            json_file: None,
            json_stdout: false,
            quiet: true,
        }
    }

    #[test]
    fn json_stdout_without_out_skips_rendering() {
        let mut opts = options(PathBuf::from("unused.bin"));
        opts.json_stdout = true;
        let renderer = select_renderer(&opts, &RentConfig::default()).unwrap();
        assert!(renderer.is_none());
    }

    #[test]
    fn out_path_selects_image_renderer() {
        let mut opts = options(PathBuf::from("unused.bin"));
        opts.output_path = Some(PathBuf::from("plot.png"));
        let renderer = select_renderer(&opts, &RentConfig::default()).unwrap().unwrap();
        assert_eq!(renderer.describe(), "plot.png");
    }

    #[test]
    fn missing_input_surfaces_as_rent_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path().join("absent.bin"));
        let err = run_plot_opts(&opts, &ThemeStyle::default_theme_map()).unwrap_err();
        assert!(matches!(err.downcast_ref::<RentError>(), Some(RentError::InputNotFound(_))));
    }

    #[test]
    fn json_file_and_image_are_both_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.bin");
        std::fs::write(&input, [7u8; 300]).unwrap();

        let mut opts = options(input);
        opts.output_path = Some(dir.path().join("plot.svg"));
        opts.json_file = Some(dir.path().join("report.json"));
        run_plot_opts(&opts, &ThemeStyle::default_theme_map()).unwrap();

        assert!(dir.path().join("plot.svg").exists());
        let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        assert!(json.contains("\"offset\": 256"));
    }

    #[test]
    fn render_failure_skips_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.bin");
        std::fs::write(&input, [1u8; 64]).unwrap();

        let mut opts = options(input);
        opts.output_path = Some(dir.path().join("absent").join("plot.svg"));
        opts.json_file = Some(dir.path().join("report.json"));

        assert!(run_plot_opts(&opts, &ThemeStyle::default_theme_map()).is_err());
        assert!(!dir.path().join("report.json").exists());
    }
}
