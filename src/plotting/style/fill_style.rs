//! Face/edge styling for patches and the legend frame.

use super::color::Color;

/// How overlapping rings of one path are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    /// Alternate rings cut holes, as shapefile polygon parts expect.
    EvenOdd,
}

impl FillRule {
    pub fn as_svg(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub face: Color,
    /// None draws no outline
    pub edge: Option<Color>,
    pub edge_width: f64,
    /// Face opacity, 0.0 - 1.0
    pub alpha: f64,
    pub rule: FillRule,
}

impl FillStyle {
    pub fn new(face: impl Into<Color>) -> Self {
        FillStyle {
            face: face.into(),
            ..Default::default()
        }
    }

    pub fn edge(mut self, color: impl Into<Color>, width: f64) -> Self {
        self.edge = Some(color.into());
        self.edge_width = width;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn rule(mut self, rule: FillRule) -> Self {
        self.rule = rule;
        self
    }

    /// SVG presentation attributes for a filled element.
    pub fn to_svg_style(&self) -> String {
        let mut attrs = format!("fill=\"{}\"", self.face.to_svg_string());
        if self.alpha < 1.0 {
            attrs.push_str(&format!(" fill-opacity=\"{}\"", self.alpha));
        }
        if self.rule != FillRule::NonZero {
            attrs.push_str(&format!(" fill-rule=\"{}\"", self.rule.as_svg()));
        }
        match self.edge {
            Some(ref edge) => attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                edge.to_svg_string(),
                self.edge_width
            )),
            None => attrs.push_str(" stroke=\"none\""),
        }
        attrs
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle {
            face: Color::default(),
            edge: None,
            edge_width: 1.0,
            alpha: 1.0,
            rule: FillRule::NonZero,
        }
    }
}
