//! Figure (canvas) implementation.

use std::fs::File;
use std::io::Write;
use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::plotting::axes::Axes;
use crate::plotting::backend::SvgBackend;
use crate::plotting::element::Bounds;
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::Color;

/// Pixels per inch when sizing a figure in inches.
pub const DPI: f64 = 100.0;

/// Handle to an axes owned by a [`Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesId(usize);

/// A figure containing one or more axes. Axes are rendered in the order they
/// were added, so later axes (insets) sit on top.
#[derive(Debug)]
pub struct Figure {
    /// Figure width in pixels
    pub width: f64,
    /// Figure height in pixels
    pub height: f64,
    /// Background color
    pub background: Color,
    axes: Vec<Axes>,
}

impl Figure {
    /// Create a new figure with the given dimensions in pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Figure {
            width,
            height,
            background: Color::WHITE,
            axes: Vec::new(),
        }
    }

    /// Create a figure sized in inches.
    pub fn from_inches(width: f64, height: f64) -> PlotResult<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(PlotError::InvalidConfig(format!(
                "figure size must be positive, got {} x {} in",
                width, height
            )));
        }
        Ok(Self::new(width * DPI, height * DPI))
    }

    /// Add the single main subplot, leaving room for labels and ticks.
    pub fn add_subplot(&mut self) -> AxesId {
        let axes = Axes::new().position(0.1, 0.95, 0.12, 0.92);
        self.push_axes(axes)
    }

    /// Add axes at `(left, bottom, width, height)` in normalized figure
    /// coordinates.
    pub fn add_axes(&mut self, left: f64, bottom: f64, width: f64, height: f64) -> AxesId {
        let mut axes = Axes::new();
        axes.position = Bounds::new(left, left + width, bottom, bottom + height);
        self.push_axes(axes)
    }

    /// Add fully built axes.
    pub fn push_axes(&mut self, axes: Axes) -> AxesId {
        self.axes.push(axes);
        AxesId(self.axes.len() - 1)
    }

    pub fn axes(&self, id: AxesId) -> Option<&Axes> {
        self.axes.get(id.0)
    }

    pub fn axes_mut(&mut self, id: AxesId) -> Option<&mut Axes> {
        self.axes.get_mut(id.0)
    }

    /// Render the figure to an SVG string.
    pub fn render(&mut self) -> PlotResult<String> {
        let mut backend = SvgBackend::new(self.width, self.height);

        backend.add_content(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            self.background.to_svg_string()
        ));

        for axes in &mut self.axes {
            axes.render_svg(&mut backend)?;
        }

        Ok(backend.render())
    }

    /// Save the figure to a file.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<()> {
        let svg = self.render()?;
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

/// Ids are only minted by the figure that owns the axes, so indexing with
/// one from the same figure never fails.
impl Index<AxesId> for Figure {
    type Output = Axes;

    fn index(&self, id: AxesId) -> &Axes {
        &self.axes[id.0]
    }
}

impl IndexMut<AxesId> for Figure {
    fn index_mut(&mut self, id: AxesId) -> &mut Axes {
        &mut self.axes[id.0]
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
