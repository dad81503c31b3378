//! Session configuration.
//!
//! This module provides serde structs for:
//! - Main axes setup (limits, labels, scales, figure size)
//! - Legend placement
//! - The minimap inset

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::plotting::LegendPosition;

// ============================================================================
// Session Configuration
// ============================================================================

/// Axis scale token. Parsing from a string is case-insensitive.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
    /// Calendar dates, x axis only
    Date,
}

impl AxisScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
            AxisScale::Date => "date",
        }
    }
}

impl FromStr for AxisScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(AxisScale::Linear),
            "log" => Ok(AxisScale::Log),
            "date" => Ok(AxisScale::Date),
            other => Err(Error::config(format!("unknown axis scale '{}'", other))),
        }
    }
}

/// Main axes configuration, fixed for the life of a session.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub xlims: (f64, f64),
    pub ylims: (f64, f64),
    #[serde(default)]
    pub xlabel: String,
    #[serde(default)]
    pub ylabel: String,
    #[serde(default)]
    pub xscale: AxisScale,
    #[serde(default)]
    pub yscale: AxisScale,
    /// Figure width in inches
    #[serde(default = "default_fig_width")]
    pub fig_width: f64,
    /// Figure height in inches
    #[serde(default = "default_fig_height")]
    pub fig_height: f64,
}

fn default_fig_width() -> f64 { 11.0 }
fn default_fig_height() -> f64 { 8.5 }

impl SessionConfig {
    /// Linear axes over the given limits with default labels and size.
    pub fn new(xlims: (f64, f64), ylims: (f64, f64)) -> Self {
        SessionConfig {
            xlims,
            ylims,
            xlabel: String::new(),
            ylabel: String::new(),
            xscale: AxisScale::Linear,
            yscale: AxisScale::Linear,
            fig_width: default_fig_width(),
            fig_height: default_fig_height(),
        }
    }

    /// Load a session configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let config: SessionConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the main axes cannot display.
    pub fn validate(&self) -> Result<()> {
        if self.yscale == AxisScale::Date {
            return Err(Error::config("only the x axis supports a date scale"));
        }
        for (axis, scale, (lo, hi)) in [
            ("x", self.xscale, self.xlims),
            ("y", self.yscale, self.ylims),
        ] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::config(format!("{} limits must be finite", axis)));
            }
            if scale == AxisScale::Log && (lo <= 0.0 || hi <= 0.0) {
                return Err(Error::config(format!(
                    "{} limits ({}, {}) must be positive on a log scale",
                    axis, lo, hi
                )));
            }
        }
        if !(self.fig_width > 0.0 && self.fig_height > 0.0) {
            return Err(Error::config(format!(
                "figure size must be positive, got {} x {}",
                self.fig_width, self.fig_height
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Legend Configuration
// ============================================================================

/// Stored legend settings, reused by every legend rebuild.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct LegendConfig {
    /// matplotlib location name ("best", "upper right", ...) or code 0-10
    #[serde(default = "default_legend_loc")]
    pub loc: String,
    /// Label font size
    #[serde(default = "default_legend_size")]
    pub size: f64,
    #[serde(default = "default_legend_ncols")]
    pub ncols: usize,
}

fn default_legend_loc() -> String { "best".to_string() }
fn default_legend_size() -> f64 { 10.0 }
fn default_legend_ncols() -> usize { 1 }

impl LegendConfig {
    pub fn new(loc: impl Into<String>, size: f64, ncols: usize) -> Self {
        LegendConfig {
            loc: loc.into(),
            size,
            ncols,
        }
    }

    pub fn position(&self) -> Result<LegendPosition> {
        Ok(self.loc.parse::<LegendPosition>()?)
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        LegendConfig::new(default_legend_loc(), default_legend_size(), default_legend_ncols())
    }
}

// ============================================================================
// Minimap Configuration
// ============================================================================

/// Inset placement and reference coordinates for the minimap.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct MinimapConfig {
    /// Left edge in normalized figure coordinates
    pub left: f64,
    /// Bottom edge in normalized figure coordinates
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
    /// Reference point x coordinates
    pub x: Vec<f64>,
    /// Reference point y coordinates
    pub y: Vec<f64>,
    #[serde(default)]
    pub xbuffer: f64,
    #[serde(default)]
    pub ybuffer: f64,
    /// Reference marker color
    #[serde(default = "default_minimap_color")]
    pub color: String,
    /// Reference marker size
    #[serde(default = "default_minimap_size")]
    pub size: f64,
}

fn default_minimap_color() -> String { "#bab0ac".to_string() }
fn default_minimap_size() -> f64 { 4.0 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_scale_case_insensitive() {
        assert_eq!("DATE".parse::<AxisScale>().unwrap(), AxisScale::Date);
        assert_eq!(" Log ".parse::<AxisScale>().unwrap(), AxisScale::Log);
        assert!("symlog".parse::<AxisScale>().is_err());
    }

    #[test]
    fn test_session_defaults_from_json() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"xlims": [0, 10], "ylims": [1, 100], "yscale": "log"}"#)
                .unwrap();
        assert_eq!(config.xscale, AxisScale::Linear);
        assert_eq!(config.yscale, AxisScale::Log);
        assert_eq!(config.fig_width, 11.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_date_y_and_bad_log() {
        let mut config = SessionConfig::new((0.0, 1.0), (0.0, 1.0));
        config.yscale = AxisScale::Date;
        assert!(config.validate().is_err());

        config.yscale = AxisScale::Log;
        assert!(config.validate().is_err());

        config.ylims = (0.1, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"xlims": [0, 1], "ylims": [0, 1], "xlabel": "Time", "xscale": "date"}"#,
        )
        .unwrap();
        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.xscale, AxisScale::Date);
        assert_eq!(config.xlabel, "Time");
    }

    #[test]
    fn test_legend_config() {
        let legend: LegendConfig = serde_json::from_str(r#"{"loc": "upper left"}"#).unwrap();
        assert_eq!(legend.size, 10.0);
        assert_eq!(legend.ncols, 1);
        assert_eq!(legend.position().unwrap(), LegendPosition::TopLeft);
        assert!(LegendConfig::new("nowhere", 10.0, 1).position().is_err());
    }
}
