//! Marker styles for line artists.
//!
//! Shapes follow matplotlib's single-character marker codes. Filled shapes
//! are drawn from unit outlines scaled to the marker radius; `+`, `x`, `|`
//! and `_` are stroke-only, so their face color is ignored.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `.`, drawn at half size
    Point,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Plus,
    Cross,
    VLine,
    HLine,
}

impl Marker {
    pub fn from_format_char(c: char) -> Option<Self> {
        let marker = match c {
            '.' => Marker::Point,
            'o' => Marker::Circle,
            's' => Marker::Square,
            '^' => Marker::TriangleUp,
            'v' => Marker::TriangleDown,
            '<' => Marker::TriangleLeft,
            '>' => Marker::TriangleRight,
            'D' => Marker::Diamond,
            'd' => Marker::ThinDiamond,
            'p' => Marker::Pentagon,
            'h' | 'H' => Marker::Hexagon,
            '8' => Marker::Octagon,
            '*' => Marker::Star,
            '+' => Marker::Plus,
            'x' | 'X' => Marker::Cross,
            '|' => Marker::VLine,
            '_' => Marker::HLine,
            _ => return None,
        };
        Some(marker)
    }

    /// Stroke-only markers have no face.
    pub fn is_filled(&self) -> bool {
        !matches!(self, Marker::Plus | Marker::Cross | Marker::VLine | Marker::HLine)
    }

    /// Outline vertices for a marker of radius 1 centred on the origin, with
    /// y pointing down as in SVG. None for circles and stroke-only markers.
    fn unit_outline(&self) -> Option<Vec<(f64, f64)>> {
        let outline = match self {
            Marker::Point | Marker::Circle => return None,
            Marker::Square => vec![(-0.8, -0.8), (0.8, -0.8), (0.8, 0.8), (-0.8, 0.8)],
            Marker::TriangleUp => vec![(0.0, -1.0), (1.0, 1.0), (-1.0, 1.0)],
            Marker::TriangleDown => vec![(0.0, 1.0), (-1.0, -1.0), (1.0, -1.0)],
            Marker::TriangleLeft => vec![(-1.0, 0.0), (1.0, -1.0), (1.0, 1.0)],
            Marker::TriangleRight => vec![(1.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)],
            Marker::Diamond => vec![(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)],
            Marker::ThinDiamond => vec![(0.0, -1.0), (0.6, 0.0), (0.0, 1.0), (-0.6, 0.0)],
            Marker::Pentagon => regular(5, 1.0, None),
            Marker::Hexagon => regular(6, 1.0, None),
            Marker::Octagon => regular(8, 1.0, None),
            Marker::Star => regular(10, 1.0, Some(0.38)),
            Marker::Plus | Marker::Cross | Marker::VLine | Marker::HLine => return None,
        };
        Some(outline)
    }

    /// Stroke segments for stroke-only markers, radius 1.
    fn unit_strokes(&self) -> &'static [((f64, f64), (f64, f64))] {
        match self {
            Marker::Plus => &[((-1.0, 0.0), (1.0, 0.0)), ((0.0, -1.0), (0.0, 1.0))],
            Marker::Cross => &[((-0.8, -0.8), (0.8, 0.8)), ((-0.8, 0.8), (0.8, -0.8))],
            Marker::VLine => &[((0.0, -1.0), (0.0, 1.0))],
            Marker::HLine => &[((-1.0, 0.0), (1.0, 0.0))],
            _ => &[],
        }
    }
}

/// Vertices of a regular polygon pointing up; alternate vertices sit at
/// `inner` when given (stars).
fn regular(vertices: usize, outer: f64, inner: Option<f64>) -> Vec<(f64, f64)> {
    (0..vertices)
        .map(|i| {
            let r = match inner {
                Some(inner) if i % 2 == 1 => inner,
                _ => outer,
            };
            let angle = TAU * i as f64 / vertices as f64 - FRAC_PI_2;
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub marker: Marker,
    /// Diameter in pixels
    pub size: f64,
    /// Face color
    pub fill: Color,
    pub edge_color: Color,
    pub edge_width: f64,
}

impl MarkerStyle {
    pub fn new(marker: Marker) -> Self {
        let size = if marker == Marker::Point { 3.0 } else { 6.0 };
        MarkerStyle {
            marker,
            size,
            ..Default::default()
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn fill(mut self, color: impl Into<Color>) -> Self {
        self.fill = color.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<Color>) -> Self {
        self.edge_color = color.into();
        self
    }

    fn svg_paint(&self) -> String {
        let stroke = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            self.edge_color.to_svg_string(),
            self.edge_width
        );
        if !self.marker.is_filled() {
            return format!("fill=\"none\" {}", stroke);
        }
        let mut paint = format!("fill=\"{}\" {}", self.fill.to_svg_string(), stroke);
        if self.fill.alpha() < 1.0 {
            paint.push_str(&format!(" fill-opacity=\"{}\"", self.fill.alpha()));
        }
        paint
    }

    /// SVG element(s) for one marker centred at pixel `(x, y)`.
    pub fn render_at(&self, x: f64, y: f64) -> String {
        let r = self.size / 2.0;
        let paint = self.svg_paint();

        if matches!(self.marker, Marker::Point | Marker::Circle) {
            return format!("<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>\n", x, y, r, paint);
        }

        let mut d = String::new();
        if let Some(outline) = self.marker.unit_outline() {
            for (i, (ux, uy)) in outline.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{}{:.2},{:.2} ", cmd, x + ux * r, y + uy * r));
            }
            d.push('Z');
        } else {
            for &((x0, y0), (x1, y1)) in self.marker.unit_strokes() {
                d.push_str(&format!(
                    "M{:.2},{:.2} L{:.2},{:.2} ",
                    x + x0 * r,
                    y + y0 * r,
                    x + x1 * r,
                    y + y1 * r
                ));
            }
        }
        format!("<path d=\"{}\" {}/>\n", d.trim_end(), paint)
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle {
            marker: Marker::Circle,
            size: 6.0,
            fill: Color::default(),
            edge_color: Color::default(),
            edge_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chars() {
        assert_eq!(Marker::from_format_char('o'), Some(Marker::Circle));
        assert_eq!(Marker::from_format_char('s'), Some(Marker::Square));
        assert_eq!(Marker::from_format_char('8'), Some(Marker::Octagon));
        assert_eq!(Marker::from_format_char('-'), None);
    }

    #[test]
    fn test_transparent_fill_renders_opacity() {
        let style = MarkerStyle::new(Marker::Circle)
            .fill(Color::TRANSPARENT)
            .edge_color("#4e79a7");
        let svg = style.render_at(10.0, 10.0);
        assert!(svg.starts_with("<circle"));
        assert!(svg.contains("fill-opacity=\"0\""));
        assert!(svg.contains("stroke=\"rgb(78,121,167)\""));
    }

    #[test]
    fn test_star_has_ten_vertices() {
        let svg = MarkerStyle::new(Marker::Star).render_at(0.0, 0.0);
        assert_eq!(svg.matches('L').count(), 9);
        assert!(svg.contains('Z'));
    }

    #[test]
    fn test_stroke_only_markers_have_no_face() {
        let svg = MarkerStyle::new(Marker::Plus).fill("#e15759").render_at(5.0, 5.0);
        assert!(svg.contains("fill=\"none\""));
        assert_eq!(svg.matches('M').count(), 2);
        assert!(!svg.contains('Z'));
    }
}
