//! Axis scaling and transformation.

mod date;
mod linear;
mod log;

pub use date::{date_to_num, datetime_to_num, num_to_date, DateScale};
pub use linear::LinearScale;
pub use log::LogScale;

use crate::plotting::error::PlotResult;

/// Trait for axis scale transformations.
pub trait Scale: std::fmt::Debug {
    /// Short name of the scale ("linear", "log", "date").
    fn name(&self) -> &'static str;

    /// Transform a data value to normalized coordinates (0.0 - 1.0).
    fn transform(&self, value: f64) -> f64;

    /// Whether `value` can be placed on this scale at all.
    fn accepts(&self, value: f64) -> bool {
        value.is_finite()
    }

    /// Set the data range for this scale.
    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()>;

    /// Get the current data range.
    fn range(&self) -> (f64, f64);

    /// Generate nice major tick values for this scale.
    fn ticks(&self, num_ticks: usize) -> Vec<f64>;

    /// Minor tick values; by default each major interval is halved.
    fn minor_ticks(&self, num_ticks: usize) -> Vec<f64> {
        let major = self.ticks(num_ticks);
        let (min, max) = self.range();
        major
            .windows(2)
            .map(|w| (w[0] + w[1]) / 2.0)
            .filter(|t| *t >= min && *t <= max)
            .collect()
    }

    /// Scale-specific tick label, if the scale has its own formatter.
    fn format_tick(&self, _value: f64) -> Option<String> {
        None
    }

    /// Clone the scale into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Scale>;
}

impl Clone for Box<dyn Scale> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Compute "nice" numbers for axis ticks.
pub fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10_f64.powf(exponent)
}

/// Generate nice tick positions for a given range.
pub fn nice_ticks(min: f64, max: f64, num_ticks: usize) -> Vec<f64> {
    if num_ticks < 2 || max <= min {
        return vec![(min + max) / 2.0];
    }

    let range = nice_number(max - min, false);
    let tick_spacing = nice_number(range / (num_ticks - 1) as f64, true);
    let nice_min = (min / tick_spacing).floor() * tick_spacing;
    let nice_max = (max / tick_spacing).ceil() * tick_spacing;

    let mut ticks = Vec::new();
    let mut tick = nice_min;
    while tick <= nice_max + tick_spacing * 0.5 {
        if tick >= min - tick_spacing * 0.001 && tick <= max + tick_spacing * 0.001 {
            ticks.push(tick);
        }
        tick += tick_spacing;
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_cover_range() {
        let ticks = nice_ticks(0.0, 10.0, 5);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(10.0));
    }

    #[test]
    fn test_default_minor_ticks_halve_intervals() {
        let mut scale = LinearScale::auto();
        scale.set_range(0.0, 10.0).unwrap();
        assert_eq!(scale.minor_ticks(5), vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }
}
