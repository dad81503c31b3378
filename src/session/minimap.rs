//! Minimap inset: reference locations, shape overlays and a movable
//! current-location marker.

use log::debug;

use crate::config::MinimapConfig;
use crate::error::Result;
use crate::plotting::{
    Axes, AxesId, Bounds, Color, Figure, GridConfig, Line2D, LineId, PlotError,
};
use crate::shapes::{add_shapefiles, OverlayReport, ShapeSource};

/// Handles into the figure for an existing minimap.
#[derive(Debug, Clone, Copy)]
pub struct Minimap {
    axes: AxesId,
    current: LineId,
}

impl Minimap {
    /// Build the inset and attach it to `figure`. Shapes are drawn first so
    /// the reference markers sit on top of them.
    pub(crate) fn create<S: ShapeSource>(
        figure: &mut Figure,
        config: &MinimapConfig,
        shapes: &[S],
        shape_colors: &[Color],
    ) -> Result<(Self, OverlayReport)> {
        if config.x.is_empty() || config.y.is_empty() {
            return Err(PlotError::EmptyData.into());
        }
        let mut reference = Line2D::new("o", Some(Color::from(&config.color)))?;
        reference.set_marker_size(config.size);
        reference.set_data(config.x.clone(), config.y.clone())?;
        let (x_min, x_max) = min_max(&config.x);
        let (y_min, y_max) = min_max(&config.y);

        let mut axes = Axes::new();
        axes.position = Bounds::new(
            config.left,
            config.left + config.width,
            config.bottom,
            config.bottom + config.height,
        );
        axes.background = Color::WHITE;
        axes.grid = GridConfig::default();
        axes.show_frame = true;

        let report = add_shapefiles(&mut axes, shapes, shape_colors)?;
        axes.add_line(reference);
        axes.set_ylim(y_min - config.ybuffer, y_max + config.ybuffer)?;
        axes.set_xlim(x_min - config.xbuffer, x_max + config.xbuffer)?;
        let current = axes.add_line(Line2D::new("o", None)?);
        axes.hide_ticks();

        // Attached last; the figure is untouched on any error above.
        let id = figure.push_axes(axes);

        debug!(
            "Created minimap with {} reference points and {} shape layers",
            config.x.len(),
            shapes.len()
        );
        Ok((Minimap { axes: id, current }, report))
    }

    /// Move and restyle the current-location marker.
    pub(crate) fn set_current(
        &self,
        figure: &mut Figure,
        x: Vec<f64>,
        y: Vec<f64>,
        color: Color,
        size: f64,
    ) -> Result<()> {
        if let Some(line) = figure[self.axes].line_mut(self.current) {
            line.set_data(x, y)?;
            line.set_marker_face_color(color.clone());
            line.set_marker_edge_color(color);
            line.set_marker_size(size);
        }
        Ok(())
    }

    pub fn axes(&self) -> AxesId {
        self.axes
    }

    pub fn current_location(&self) -> LineId {
        self.current
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
