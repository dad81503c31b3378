//! Text styling for titles, axis labels, tick labels and legend entries.

use super::color::Color;

/// Horizontal alignment relative to the text's anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// SVG `text-anchor` value.
    pub fn as_svg(&self) -> &'static str {
        match self {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Size in pixels
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
    pub align: HAlign,
    /// Degrees, counter-clockwise negative as in SVG
    pub rotation: f64,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    /// Rough rendered width of `text` in pixels.
    pub fn approx_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_size * 0.6
    }

    /// Font and fill attributes; alignment and position are left to the caller.
    pub fn to_svg_attrs(&self) -> String {
        let weight = if self.bold { "bold" } else { "normal" };
        format!(
            "font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\"",
            self.font_size,
            weight,
            self.color.to_svg_string()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font_size: 12.0,
            bold: false,
            color: Color::BLACK,
            align: HAlign::Left,
            rotation: 0.0,
        }
    }
}
