// rent/src/lib.rs
//! # rent CLI Application
//!
//! This crate provides the command-line front end for `rent-core`: argument
//! parsing, logging setup, themed status output and the plot command itself.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

// Re-export the command runner
pub use commands::plot::{run_plot_opts, PlotOptions};
