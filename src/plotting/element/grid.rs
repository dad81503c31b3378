//! Grid lines, selected the way matplotlib's `Axes.grid(which, axis)` does.

use crate::plotting::style::{Color, DashPattern, LineStyle};

/// Which tick set the grid follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Which {
    #[default]
    Major,
    Minor,
    Both,
}

/// Which axis' ticks get grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAxis {
    X,
    Y,
    #[default]
    Both,
}

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub which: Which,
    pub axis: GridAxis,
    pub major_style: LineStyle,
    pub minor_style: LineStyle,
    pub alpha: f64,
}

impl GridConfig {
    pub fn new(which: Which, axis: GridAxis) -> Self {
        GridConfig {
            visible: true,
            which,
            axis,
            ..Default::default()
        }
    }

    /// Minor vertical lines only, as on time-series axes.
    pub fn minor_x() -> Self {
        Self::new(Which::Minor, GridAxis::X)
    }

    /// Whether lines are drawn for the given axis (`true` for x) and tick
    /// set (`true` for major).
    pub fn draws(&self, x_axis: bool, major: bool) -> bool {
        let axis_ok = match self.axis {
            GridAxis::X => x_axis,
            GridAxis::Y => !x_axis,
            GridAxis::Both => true,
        };
        let which_ok = match self.which {
            Which::Major => major,
            Which::Minor => !major,
            Which::Both => true,
        };
        self.visible && axis_ok && which_ok
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: false,
            which: Which::Major,
            axis: GridAxis::Both,
            major_style: LineStyle::new().color(Color::LIGHT_GRAY).width(0.5),
            minor_style: LineStyle::new()
                .color(Color::LIGHT_GRAY)
                .width(0.5)
                .dash(DashPattern::Dotted),
            alpha: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_x_selection() {
        let grid = GridConfig::minor_x();
        assert!(grid.draws(true, false));
        assert!(!grid.draws(true, true));
        assert!(!grid.draws(false, false));
        assert!(!GridConfig::default().draws(true, true));
    }
}
