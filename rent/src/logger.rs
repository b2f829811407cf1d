// rent/src/logger.rs
//! Logging setup for the rent binary.
//!
//! Libraries log through the `log` facade; only the binary installs a
//! backend. Output goes to stderr so stdout stays reserved for the plot and
//! JSON.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// `level_override` wins over `RUST_LOG`; without it `RUST_LOG` applies and
/// falls back to `warn`. Calling this twice is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
