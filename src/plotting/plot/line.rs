//! Line artist: a data series drawn as a line, markers, or both.

use crate::plotting::element::{Bounds, RenderContext};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::Plot;
use crate::plotting::style::color::from_format_char;
use crate::plotting::style::{Color, DashPattern, LineStyle, Marker, MarkerStyle};

/// A parsed matplotlib-style format string such as `"o"`, `"r--"` or `"s-"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineFormat {
    pub dash: Option<DashPattern>,
    pub marker: Option<Marker>,
    color_char: Option<char>,
}

impl LineFormat {
    /// Parse a format string. Color, line style and marker may appear in any
    /// order, each at most once.
    pub fn parse(fmt: &str) -> PlotResult<Self> {
        let invalid = |message: String| PlotError::InvalidFormat {
            fmt: fmt.to_string(),
            message,
        };

        let mut format = LineFormat::default();
        let mut rest = fmt;
        while let Some(c) = rest.chars().next() {
            if let Some((dash, len)) = DashPattern::parse_prefix(rest) {
                if format.dash.replace(dash).is_some() {
                    return Err(invalid("more than one line style".to_string()));
                }
                rest = &rest[len..];
                continue;
            }
            if let Some(marker) = Marker::from_format_char(c) {
                if format.marker.replace(marker).is_some() {
                    return Err(invalid("more than one marker".to_string()));
                }
            } else if from_format_char(c).is_some() {
                if format.color_char.replace(c).is_some() {
                    return Err(invalid("more than one color".to_string()));
                }
            } else {
                return Err(invalid(format!("unrecognized character '{}'", c)));
            }
            rest = &rest[c.len_utf8()..];
        }
        Ok(format)
    }

    /// Color named by the format string, if any.
    pub fn color(&self) -> Option<Color> {
        self.color_char.and_then(from_format_char)
    }

    /// A marker with no explicit line style means markers only; an empty
    /// format means a solid line.
    pub fn draws_line(&self) -> bool {
        self.dash.is_some() || self.marker.is_none()
    }
}

/// A mutable line artist, the equivalent of a matplotlib `Line2D`.
#[derive(Debug, Clone)]
pub struct Line2D {
    x: Vec<f64>,
    y: Vec<f64>,
    label: String,
    color: Color,
    line: Option<LineStyle>,
    marker: Option<MarkerStyle>,
}

impl Line2D {
    /// Create an empty line styled by a format string. The format's color is
    /// used unless `color` is given.
    pub fn new(fmt: &str, color: Option<Color>) -> PlotResult<Self> {
        let format = LineFormat::parse(fmt)?;
        let color = color.or_else(|| format.color()).unwrap_or_default();

        let line = format.draws_line().then(|| {
            LineStyle::new()
                .color(color.clone())
                .dash(format.dash.unwrap_or_default())
        });
        let marker = format.marker.map(|m| {
            MarkerStyle::new(m)
                .fill(color.clone())
                .edge_color(color.clone())
        });

        Ok(Line2D {
            x: Vec::new(),
            y: Vec::new(),
            label: String::new(),
            color,
            line,
            marker,
        })
    }

    /// Set the label for the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Render markers edge-only: colored outline, transparent face.
    pub fn hollow(mut self) -> Self {
        if let Some(ref mut marker) = self.marker {
            marker.fill = Color::TRANSPARENT;
        }
        self
    }

    pub fn set_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> PlotResult<()> {
        if x.len() != y.len() {
            return Err(PlotError::InvalidData(format!(
                "x and y must have the same length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub fn xdata(&self) -> &[f64] {
        &self.x
    }

    pub fn ydata(&self) -> &[f64] {
        &self.y
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// The line's own color (marker face/edge overrides are not reflected).
    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub fn marker(&self) -> Option<&MarkerStyle> {
        self.marker.as_ref()
    }

    pub fn set_marker_face_color(&mut self, color: impl Into<Color>) {
        if let Some(ref mut marker) = self.marker {
            marker.fill = color.into();
        }
    }

    pub fn set_marker_edge_color(&mut self, color: impl Into<Color>) {
        if let Some(ref mut marker) = self.marker {
            marker.edge_color = color.into();
        }
    }

    pub fn set_marker_size(&mut self, size: f64) {
        if let Some(ref mut marker) = self.marker {
            marker.size = size;
        }
    }
}

impl Plot for Line2D {
    fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.x, &self.y)
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn line_style(&self) -> Option<LineStyle> {
        self.line.clone()
    }

    fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker.clone()
    }

    fn render_svg(&self, ctx: &RenderContext<'_>) -> String {
        let mut svg = String::new();

        let points: Vec<(f64, f64)> = self
            .x
            .iter()
            .zip(self.y.iter())
            .filter_map(|(&x, &y)| ctx.transform(x, y))
            .collect();

        if points.is_empty() {
            return svg;
        }

        if let Some(ref line_style) = self.line {
            if points.len() >= 2 {
                let path_data: String = points
                    .iter()
                    .enumerate()
                    .map(|(i, (x, y))| {
                        if i == 0 {
                            format!("M{:.2},{:.2}", x, y)
                        } else {
                            format!(" L{:.2},{:.2}", x, y)
                        }
                    })
                    .collect();

                svg.push_str(&format!(
                    "<path d=\"{}\" {}/>\n",
                    path_data,
                    line_style.to_svg_style()
                ));
            }
        }

        if let Some(ref marker_style) = self.marker {
            for &(x, y) in &points {
                svg.push_str(&marker_style.render_at(x, y));
            }
        }

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::scale::{LinearScale, Scale};

    #[test]
    fn test_parse_marker_only() {
        let fmt = LineFormat::parse("o").unwrap();
        assert_eq!(fmt.marker, Some(Marker::Circle));
        assert!(!fmt.draws_line());
    }

    #[test]
    fn test_parse_any_order() {
        let a = LineFormat::parse("r--s").unwrap();
        let b = LineFormat::parse("s--r").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dash, Some(DashPattern::Dashed));
        assert_eq!(a.color(), Some(Color::RED));
        assert!(a.draws_line());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LineFormat::parse("oo").is_err());
        assert!(LineFormat::parse("q").is_err());
        assert!(LineFormat::parse("---").is_err());
    }

    #[test]
    fn test_explicit_color_wins_over_format() {
        let line = Line2D::new("r-", Some(Color::from("#4e79a7"))).unwrap();
        assert_eq!(line.color(), &Color::Rgb(0x4e, 0x79, 0xa7));
    }

    #[test]
    fn test_set_data_length_mismatch() {
        let mut line = Line2D::new("o", None).unwrap();
        assert!(line.set_data(vec![1.0, 2.0], vec![1.0]).is_err());
        line.set_data(vec![1.0], vec![2.0]).unwrap();
        assert_eq!(line.xdata(), &[1.0]);
    }

    #[test]
    fn test_single_point_marker_renders() {
        let mut line = Line2D::new("s", Some(Color::BLACK)).unwrap();
        line.set_data(vec![0.5], vec![0.5]).unwrap();
        let mut xs = LinearScale::auto();
        xs.set_range(0.0, 1.0).unwrap();
        let ys = xs.clone();
        let ctx = RenderContext {
            x_scale: &xs,
            y_scale: &ys,
            pixel_bounds: Bounds::new(0.0, 100.0, 0.0, 100.0),
        };
        let svg = line.render_svg(&ctx);
        // 6px square, outline at 0.8 of the radius around (50, 50)
        assert!(svg.starts_with("<path d=\"M47.60,47.60 L52.40,47.60 L52.40,52.40 L47.60,52.40 Z\""));
        assert!(!svg.contains("stroke-linecap"));
    }

    #[test]
    fn test_hollow_marker() {
        let line = Line2D::new("o", Some(Color::RED)).unwrap().hollow();
        let marker = line.marker().unwrap();
        assert_eq!(marker.fill, Color::TRANSPARENT);
        assert_eq!(marker.edge_color, Color::RED);
    }
}
