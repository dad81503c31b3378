//! Styling module.
//!
//! Colors, line styles, markers, fills and text styles used by the artists.

pub mod color;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;

pub use color::Color;
pub use fill_style::{FillRule, FillStyle};
pub use line_style::{DashPattern, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{HAlign, TextStyle};
