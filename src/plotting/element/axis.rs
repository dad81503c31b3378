//! Axis configuration.

use crate::plotting::style::{Color, LineStyle, TextStyle};

/// Configuration for an axis.
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Whether the axis line is drawn
    pub visible: bool,
    /// Axis line style
    pub line_style: LineStyle,
    /// Whether to show tick marks
    pub show_ticks: bool,
    /// Whether to show tick labels
    pub show_tick_labels: bool,
    /// Length of tick marks in pixels
    pub tick_length: f64,
    /// Style for tick labels
    pub tick_label_style: TextStyle,
    /// Number of ticks to generate
    pub num_ticks: usize,
    /// Padding between tick marks and labels
    pub tick_padding: f64,
    /// Custom tick positions (overrides automatic generation)
    pub tick_positions: Option<Vec<f64>>,
    /// Custom tick labels (must match tick_positions length)
    pub tick_labels: Option<Vec<String>>,
}

impl AxisConfig {
    /// Create a new axis configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide tick marks and tick labels, keeping the axis line.
    pub fn hide_ticks(&mut self) {
        self.show_ticks = false;
        self.show_tick_labels = false;
        self.tick_labels = Some(Vec::new());
    }

    /// Format a tick value as a label.
    pub fn format_tick(&self, value: f64) -> String {
        if value == 0.0 {
            "0".to_string()
        } else if value.abs() >= 1e5 || value.abs() < 0.01 {
            format!("{:.1e}", value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            let s = format!("{:.2}", value);
            s.trim_end_matches('0').to_string()
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        AxisConfig {
            visible: true,
            line_style: LineStyle::new().color(Color::BLACK).width(1.0),
            show_ticks: true,
            show_tick_labels: true,
            tick_length: 5.0,
            tick_label_style: TextStyle::new().font_size(10.0),
            num_ticks: 6,
            tick_padding: 3.0,
            tick_positions: None,
            tick_labels: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tick() {
        let axis = AxisConfig::new();
        assert_eq!(axis.format_tick(0.0), "0");
        assert_eq!(axis.format_tick(250.0), "250");
        assert_eq!(axis.format_tick(2.5), "2.5");
        assert_eq!(axis.format_tick(0.001), "1.0e-3");
    }

    #[test]
    fn test_hide_ticks() {
        let mut axis = AxisConfig::new();
        axis.hide_ticks();
        assert!(!axis.show_ticks);
        assert!(!axis.show_tick_labels);
        assert_eq!(axis.tick_labels, Some(Vec::new()));
        assert!(axis.visible);
    }
}
