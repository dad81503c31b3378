//! Error types for massplot.
//!
//! One enum covers every failure a session, shape overlay, export sink or
//! plot script can report. Plotting backend errors are wrapped as-is.

use thiserror::Error;

use crate::plotting::PlotError;
use crate::session::FeatureId;

/// The main error type for massplot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Every palette color is checked out
    #[error("Color palette exhausted: all {0} colors are in use")]
    PaletteExhausted(usize),

    /// The feature id was never issued or has been removed
    #[error("Unknown feature: {0}")]
    UnknownFeature(FeatureId),

    /// `update_legend` was called before `create_legend`
    #[error("Legend has not been created yet")]
    LegendNotCreated,

    /// A minimap operation was called before `create_minimap`
    #[error("No minimap has been created")]
    NoMinimap,

    /// `create_minimap` was called twice
    #[error("A minimap already exists for this session")]
    MinimapExists,

    /// Invalid parameter errors
    #[error("Invalid argument: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Shape layer loading errors
    #[error("Shape error: {message}")]
    Shape { message: String },

    /// Plotting backend errors
    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// GeoJSON parsing errors
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Plot script failed schema validation
    #[error("Schema validation failed:\n{0}")]
    Schema(String),
}

impl Error {
    pub(crate) fn invalid(param: &str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Error::Shape {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with massplot's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
