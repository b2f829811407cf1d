//! Configuration management for `rent-core`.
//!
//! This module defines the plot and terminal settings used by the renderers.
//! It handles deserialization of YAML configurations and provides utilities
//! for loading and validating them. Every field has a default, so a user file
//! only needs the keys it wants to change.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for image output and the shared chart layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Fixed y-axis range, `[min, max]`.
    pub y_range: [f64; 2],
    pub x_label: String,
    pub y_label: String,
    pub label_font_size: u32,
    /// RGB colour of the entropy line.
    pub line_color: [u8; 3],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            y_range: [-0.1, 1.2],
            x_label: "Offset".to_string(),
            y_label: "Entropy".to_string(),
            label_font_size: 14,
            line_color: [0, 0, 0],
        }
    }
}

/// Size of the character grid used when the plot is shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { width: 100, height: 30 }
    }
}

/// Represents the top-level configuration structure for rent.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RentConfig {
    pub plot: PlotConfig,
    pub terminal: TerminalConfig,
}

impl RentConfig {
    /// Loads plot settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading plot configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RentConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads the built-in settings from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default plot configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: RentConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Returns the user configuration when a path is given, the built-in one otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load_default(),
        }
    }

    /// Checks dimensions and the y-axis range.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.plot.width == 0 || self.plot.height == 0 {
            errors.push(format!(
                "plot dimensions must be non-zero, got {}x{}.",
                self.plot.width, self.plot.height
            ));
        }
        if self.terminal.width == 0 || self.terminal.height == 0 {
            errors.push(format!(
                "terminal dimensions must be non-zero, got {}x{}.",
                self.terminal.width, self.terminal.height
            ));
        }

        let [lo, hi] = self.plot.y_range;
        if !lo.is_finite() || !hi.is_finite() {
            errors.push("y_range bounds must be finite numbers.".to_string());
        } else if lo >= hi {
            errors.push(format!("y_range lower bound {} must be below upper bound {}.", lo, hi));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}
