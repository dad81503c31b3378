//! Artists that live on an axes: lines and polygon patches.

mod line;
mod patch;

pub use line::{Line2D, LineFormat};
pub use patch::PolygonPatch;

use crate::plotting::element::{Bounds, LegendEntry, RenderContext};
use crate::plotting::style::{LineStyle, MarkerStyle};

/// Trait for artists that can be rendered.
pub trait Plot {
    /// Get the data bounds for this artist.
    fn bounds(&self) -> Option<Bounds>;

    /// Get the label for this artist (for legend).
    fn label(&self) -> Option<&str> {
        None
    }

    /// Get the line style for legend display.
    fn line_style(&self) -> Option<LineStyle> {
        None
    }

    /// Get the marker style for legend display.
    fn marker_style(&self) -> Option<MarkerStyle> {
        None
    }

    /// Create a legend entry for this artist.
    fn legend_entry(&self) -> Option<LegendEntry> {
        self.label().map(|label| LegendEntry {
            label: label.to_string(),
            line_style: self.line_style(),
            marker_style: self.marker_style(),
        })
    }

    /// Render this artist to SVG, returning the SVG elements as a string.
    fn render_svg(&self, ctx: &RenderContext<'_>) -> String;
}
