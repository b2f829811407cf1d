// rent/src/main.rs
//! rent entry point.
//!
//! Parses arguments, sets up logging and the theme, then runs the plot
//! command. A missing input file is reported on stdout with exit status 1.

use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};

use rent::cli::Cli;
use rent::commands::plot::{error_msg, run_plot_opts, PlotOptions};
use rent::logger;
use rent::ui::theme::build_theme_map;
use rent_core::RentError;

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("rent started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = match build_theme_map(args.theme.as_ref()) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let opts = PlotOptions {
        input: args.input,
        output_path: args.output,
        chunk_size: args.chunk_size,
        config_path: args.config,
        json_file: args.json_file,
        json_stdout: args.json_stdout,
        quiet: args.quiet,
    };

    match run_plot_opts(&opts, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RentError>() {
                Some(not_found @ RentError::InputNotFound(_)) => println!("{}", not_found),
                _ => error_msg(format!("{:#}", err), &theme_map),
            }
            ExitCode::FAILURE
        }
    }
}
