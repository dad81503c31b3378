//! massplot: bookkeeping for batch multi-page plots.
//!
//! A [`Session`] owns a figure with one main axes, a ten-color palette
//! handed out by checkout/checkin, a registry of named line "features" with
//! a legend mask, and an optional minimap inset with shape overlays. Pages
//! are rendered to SVG and pushed into a caller-owned [`PageSink`].

pub mod config;
pub mod error;
pub mod export;
pub mod plotting;
pub mod script;
pub mod session;
pub mod shapes;

pub use config::{AxisScale, LegendConfig, MinimapConfig, SessionConfig};
pub use error::{Error, Result};
pub use export::{PageBuffer, PageSink, SvgPageWriter};
pub use session::{FeatureId, Palette, Session, PALETTE};
pub use shapes::{classify_shape, OverlayReport, ShapeKind, ShapeLayer, ShapeSource};
