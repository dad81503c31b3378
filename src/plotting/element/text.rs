//! Text element for labels and titles.

use crate::plotting::style::TextStyle;

/// A text element that can be rendered on a plot.
#[derive(Debug, Clone)]
pub struct Text {
    /// The text content
    pub content: String,
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Style configuration
    pub style: TextStyle,
}

impl Text {
    /// Create a new text element.
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            style: TextStyle::default(),
        }
    }

    /// Set the style for this text.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Generate SVG for this text element.
    pub fn to_svg(&self) -> String {
        let transform = if self.style.rotation != 0.0 {
            format!(" transform=\"rotate({},{},{})\"", self.style.rotation, self.x, self.y)
        } else {
            String::new()
        };

        format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" {}{}>{}</text>",
            self.x,
            self.y,
            self.style.align.as_svg(),
            self.style.to_svg_attrs(),
            transform,
            escape_xml(&self.content)
        )
    }
}

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Pb < 5 & Cu"), "Pb &lt; 5 &amp; Cu");
    }

    #[test]
    fn test_rotated_text() {
        let mut style = TextStyle::new();
        style.rotation = -90.0;
        let svg = Text::new("Concentration", 10.0, 20.0).style(style).to_svg();
        assert!(svg.contains("rotate(-90,10,20)"));
        assert!(svg.contains(">Concentration</text>"));
    }
}
