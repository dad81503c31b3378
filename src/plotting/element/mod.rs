//! Visual elements for plots.

mod axis;
mod grid;
mod legend;
pub mod text;

pub use axis::AxisConfig;
pub use grid::{GridAxis, GridConfig, Which};
pub use legend::{Legend, LegendEntry, LegendPosition};
pub use text::{escape_xml, Text};

use crate::plotting::scale::Scale;

/// Bounding box for elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inverted bounds that any included point will replace.
    pub fn empty() -> Self {
        Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        )
    }

    /// Smallest bounds holding every finite point of `x`/`y`, if any.
    pub fn of_points(x: &[f64], y: &[f64]) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for (&px, &py) in x.iter().zip(y.iter()) {
            if px.is_finite() && py.is_finite() {
                bounds.include_point(px, py);
            }
        }
        bounds.is_valid().then_some(bounds)
    }

    /// Get the width of the bounds.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get the height of the bounds.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True once at least one finite point has been included.
    pub fn is_valid(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Expand bounds to include another bounds.
    pub fn include_bounds(&mut self, other: &Bounds) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// Add padding as a fraction of the range.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds {
            x_min: self.x_min - x_pad,
            x_max: self.x_max + x_pad,
            y_min: self.y_min - y_pad,
            y_max: self.y_max + y_pad,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Maps data coordinates into the pixel rectangle of one axes.
pub struct RenderContext<'a> {
    pub x_scale: &'a dyn Scale,
    pub y_scale: &'a dyn Scale,
    /// The pixel bounds to render into.
    pub pixel_bounds: Bounds,
}

impl RenderContext<'_> {
    /// Transform a data point to pixel coordinates, or `None` if either
    /// coordinate cannot be placed on its scale.
    pub fn transform(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.x_scale.accepts(x) || !self.y_scale.accepts(y) {
            return None;
        }
        let x_norm = self.x_scale.transform(x);
        let y_norm = self.y_scale.transform(y);

        let px = self.pixel_bounds.x_min + x_norm * self.pixel_bounds.width();
        // Flip Y axis since SVG has Y increasing downward
        let py = self.pixel_bounds.y_max - y_norm * self.pixel_bounds.height();

        Some((px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::{LinearScale, LogScale};

    #[test]
    fn test_of_points_skips_non_finite() {
        let b = Bounds::of_points(&[1.0, f64::NAN, 3.0], &[2.0, 5.0, -1.0]).unwrap();
        assert_eq!(b, Bounds::new(1.0, 3.0, -1.0, 2.0));
        assert!(Bounds::of_points(&[], &[]).is_none());
    }

    #[test]
    fn test_transform_flips_y() {
        let mut xs = LinearScale::auto();
        xs.set_range(0.0, 10.0).unwrap();
        let mut ys = LinearScale::auto();
        ys.set_range(0.0, 10.0).unwrap();
        let ctx = RenderContext {
            x_scale: &xs,
            y_scale: &ys,
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        };
        assert_eq!(ctx.transform(0.0, 0.0), Some((0.0, 100.0)));
        assert_eq!(ctx.transform(10.0, 10.0), Some((100.0, 0.0)));
    }

    #[test]
    fn test_log_scale_drops_non_positive() {
        let xs = LinearScale::auto();
        let ys = LogScale::auto();
        let ctx = RenderContext {
            x_scale: &xs,
            y_scale: &ys,
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        };
        assert!(ctx.transform(0.5, 0.0).is_none());
        assert!(ctx.transform(0.5, 5.0).is_some());
    }
}
