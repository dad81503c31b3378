//! Filled polygon patches (shape overlays).

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::plot::Plot;
use crate::plotting::style::{Color, FillRule, FillStyle};

/// A filled polygon made of one or more rings. Inner rings cut holes
/// (even-odd fill).
#[derive(Debug, Clone)]
pub struct PolygonPatch {
    pub rings: Vec<Vec<(f64, f64)>>,
    pub style: FillStyle,
}

impl PolygonPatch {
    pub fn new(rings: Vec<Vec<(f64, f64)>>) -> Self {
        PolygonPatch {
            rings,
            style: FillStyle::default().rule(FillRule::EvenOdd),
        }
    }

    /// Set face and edge color together.
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        let c = color.into();
        self.style.face = c.clone();
        self.style.edge = Some(c);
        self
    }
}

impl Plot for PolygonPatch {
    fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for &(x, y) in self.rings.iter().flatten() {
            if x.is_finite() && y.is_finite() {
                bounds.include_point(x, y);
            }
        }
        bounds.is_valid().then_some(bounds)
    }

    fn render_svg(&self, ctx: &RenderContext<'_>) -> String {
        let mut path = String::new();
        for ring in &self.rings {
            let points: Vec<(f64, f64)> = ring
                .iter()
                .filter_map(|&(x, y)| ctx.transform(x, y))
                .collect();
            if points.len() < 3 {
                continue;
            }
            for (i, (px, py)) in points.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                path.push_str(&format!("{}{:.2},{:.2} ", cmd, px, py));
            }
            path.push_str("Z ");
        }
        if path.is_empty() {
            return String::new();
        }
        format!(
            "<path d=\"{}\" {}/>\n",
            path.trim_end(),
            self.style.to_svg_style()
        )
    }
}
