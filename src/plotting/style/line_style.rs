//! Stroke styling for lines, grid lines and the axes frame.

use super::color::Color;

/// matplotlib line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl DashPattern {
    /// Dash lengths in units of the line width, as matplotlib scales them.
    fn unit_pattern(&self) -> &'static [f64] {
        match self {
            DashPattern::Solid => &[],
            DashPattern::Dashed => &[3.7, 1.6],
            DashPattern::Dotted => &[1.0, 1.65],
            DashPattern::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }

    /// SVG `stroke-dasharray` for a stroke of the given width, or None when
    /// solid.
    pub fn dasharray(&self, width: f64) -> Option<String> {
        let unit = self.unit_pattern();
        if unit.is_empty() {
            return None;
        }
        let scale = width.max(1.0);
        Some(
            unit.iter()
                .map(|d| format!("{:.2}", d * scale))
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Match a line-style token at the start of a format string, returning
    /// the pattern and how many characters it used.
    pub fn parse_prefix(s: &str) -> Option<(Self, usize)> {
        // two-character tokens first so "--" is not read as "-"
        if s.starts_with("--") {
            Some((DashPattern::Dashed, 2))
        } else if s.starts_with("-.") {
            Some((DashPattern::DashDot, 2))
        } else if s.starts_with(':') {
            Some((DashPattern::Dotted, 1))
        } else if s.starts_with('-') {
            Some((DashPattern::Solid, 1))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    /// Pixels
    pub width: f64,
    pub dash: DashPattern,
}

impl LineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Stroke attributes for an unfilled SVG element.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" fill=\"none\"",
            self.color.to_svg_string(),
            self.width
        );
        if self.color.alpha() < 1.0 {
            attrs.push_str(&format!(" stroke-opacity=\"{}\"", self.color.alpha()));
        }
        if let Some(dasharray) = self.dash.dasharray(self.width) {
            attrs.push_str(&format!(" stroke-dasharray=\"{}\"", dasharray));
        }
        attrs
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::default(),
            width: 1.5,
            dash: DashPattern::Solid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix_prefers_longest() {
        assert_eq!(DashPattern::parse_prefix("--o"), Some((DashPattern::Dashed, 2)));
        assert_eq!(DashPattern::parse_prefix("-.s"), Some((DashPattern::DashDot, 2)));
        assert_eq!(DashPattern::parse_prefix("-o"), Some((DashPattern::Solid, 1)));
        assert_eq!(DashPattern::parse_prefix("o"), None);
    }

    #[test]
    fn test_dasharray_scales_with_width() {
        assert_eq!(DashPattern::Solid.dasharray(2.0), None);
        assert_eq!(DashPattern::Dashed.dasharray(2.0).as_deref(), Some("7.40,3.20"));
        assert_eq!(DashPattern::Dashed.dasharray(0.5).as_deref(), Some("3.70,1.60"));
    }
}
