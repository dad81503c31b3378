//! Legend configuration.

use std::str::FromStr;

use crate::plotting::error::PlotError;
use crate::plotting::style::{Color, FillStyle, LineStyle, MarkerStyle, TextStyle};

/// Position of the legend, using matplotlib's `loc` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    /// Let the renderer choose (placed like `upper right`)
    #[default]
    Best,
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
    /// `right`, which matplotlib treats as `center right`
    Right,
    Left,
    Bottom,
    Top,
    Center,
}

impl LegendPosition {
    /// Parse a matplotlib numeric location code (0-10).
    pub fn from_code(code: u8) -> Option<Self> {
        let pos = match code {
            0 => LegendPosition::Best,
            1 => LegendPosition::TopRight,
            2 => LegendPosition::TopLeft,
            3 => LegendPosition::BottomLeft,
            4 => LegendPosition::BottomRight,
            5 | 7 => LegendPosition::Right,
            6 => LegendPosition::Left,
            8 => LegendPosition::Bottom,
            9 => LegendPosition::Top,
            10 => LegendPosition::Center,
            _ => return None,
        };
        Some(pos)
    }

    /// Anchor point (normalized axes coordinates) and which corner of the
    /// legend box sits on it, as fractions of the box size.
    pub fn anchor(&self) -> ((f64, f64), (f64, f64)) {
        match self {
            LegendPosition::Best | LegendPosition::TopRight => ((0.98, 0.98), (1.0, 0.0)),
            LegendPosition::TopLeft => ((0.02, 0.98), (0.0, 0.0)),
            LegendPosition::BottomLeft => ((0.02, 0.02), (0.0, 1.0)),
            LegendPosition::BottomRight => ((0.98, 0.02), (1.0, 1.0)),
            LegendPosition::Right => ((0.98, 0.5), (1.0, 0.5)),
            LegendPosition::Left => ((0.02, 0.5), (0.0, 0.5)),
            LegendPosition::Bottom => ((0.5, 0.02), (0.5, 1.0)),
            LegendPosition::Top => ((0.5, 0.98), (0.5, 0.0)),
            LegendPosition::Center => ((0.5, 0.5), (0.5, 0.5)),
        }
    }
}

impl FromStr for LegendPosition {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Ok(code) = token.parse::<u8>() {
            return LegendPosition::from_code(code).ok_or_else(|| {
                PlotError::InvalidConfig(format!("unknown legend location code {}", code))
            });
        }
        let pos = match token.as_str() {
            "best" => LegendPosition::Best,
            "upper right" => LegendPosition::TopRight,
            "upper left" => LegendPosition::TopLeft,
            "lower left" => LegendPosition::BottomLeft,
            "lower right" => LegendPosition::BottomRight,
            "right" | "center right" => LegendPosition::Right,
            "center left" => LegendPosition::Left,
            "lower center" => LegendPosition::Bottom,
            "upper center" => LegendPosition::Top,
            "center" => LegendPosition::Center,
            _ => {
                return Err(PlotError::InvalidConfig(format!(
                    "unknown legend location '{}'",
                    s
                )))
            }
        };
        Ok(pos)
    }
}

/// A single entry in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Label text
    pub label: String,
    /// Line style (if the artist draws a connecting line)
    pub line_style: Option<LineStyle>,
    /// Marker style (if the artist draws markers)
    pub marker_style: Option<MarkerStyle>,
}

/// Legend configuration and entries.
#[derive(Debug, Clone)]
pub struct Legend {
    /// Legend entries
    pub entries: Vec<LegendEntry>,
    /// Position of the legend
    pub position: LegendPosition,
    /// Number of columns entries are laid out in
    pub ncols: usize,
    /// Background fill style
    pub background: FillStyle,
    /// Text style for labels
    pub text_style: TextStyle,
    /// Padding inside the legend box
    pub padding: f64,
    /// Length of the line sample in the legend
    pub line_length: f64,
    /// Gap between line/marker and label
    pub label_gap: f64,
    /// Horizontal gap between columns
    pub column_gap: f64,
}

impl Legend {
    /// Create a new legend.
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Legend {
            entries,
            ..Default::default()
        }
    }

    /// Set the position.
    pub fn position(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the label font size.
    pub fn font_size(mut self, size: f64) -> Self {
        self.text_style.font_size = size;
        self
    }

    /// Set the column count (at least one).
    pub fn ncols(mut self, ncols: usize) -> Self {
        self.ncols = ncols.max(1);
        self
    }

    /// Number of rows needed to lay entries out in `ncols` columns.
    pub fn rows(&self) -> usize {
        self.entries.len().div_ceil(self.ncols.max(1))
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            entries: Vec::new(),
            position: LegendPosition::Best,
            ncols: 1,
            background: FillStyle::new(Color::WHITE)
                .alpha(0.8)
                .edge(Color::LIGHT_GRAY, 0.8),
            text_style: TextStyle::new().font_size(10.0),
            padding: 8.0,
            line_length: 20.0,
            label_gap: 8.0,
            column_gap: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_names_and_codes() {
        assert_eq!("upper left".parse::<LegendPosition>().unwrap(), LegendPosition::TopLeft);
        assert_eq!("Lower Center".parse::<LegendPosition>().unwrap(), LegendPosition::Bottom);
        assert_eq!("4".parse::<LegendPosition>().unwrap(), LegendPosition::BottomRight);
        assert_eq!("best".parse::<LegendPosition>().unwrap(), LegendPosition::Best);
        assert!("somewhere".parse::<LegendPosition>().is_err());
        assert!("11".parse::<LegendPosition>().is_err());
    }

    #[test]
    fn test_rows_for_columns() {
        let entry = LegendEntry {
            label: "Benzene".to_string(),
            line_style: None,
            marker_style: None,
        };
        let legend = Legend::new(vec![entry; 5]).ncols(2);
        assert_eq!(legend.rows(), 3);
        assert_eq!(Legend::new(Vec::new()).ncols(0).ncols, 1);
    }
}
