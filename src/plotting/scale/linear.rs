//! Linear scale transformation.

use super::{nice_ticks, Scale};
use crate::plotting::error::PlotResult;

/// A linear scale for axis transformation.
#[derive(Debug, Clone)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    /// Create a linear scale with automatic range (to be set later).
    pub fn auto() -> Self {
        LinearScale { min: 0.0, max: 1.0 }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        LinearScale::auto()
    }
}

impl Scale for LinearScale {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.min) / range
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if min == max {
            // Add a small padding if min equals max
            let padding = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            self.min = min - padding;
            self.max = max + padding;
        } else {
            // Inverted limits are allowed, like matplotlib's set_xlim(10, 0)
            self.min = min;
            self.max = max;
        }
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min.min(self.max), self.min.max(self.max), num_ticks)
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_endpoints() {
        let mut scale = LinearScale::auto();
        scale.set_range(10.0, 20.0).unwrap();
        assert_eq!(scale.transform(10.0), 0.0);
        assert_eq!(scale.transform(20.0), 1.0);
        assert_eq!(scale.transform(15.0), 0.5);
    }

    #[test]
    fn test_degenerate_range_is_padded() {
        let mut scale = LinearScale::auto();
        scale.set_range(5.0, 5.0).unwrap();
        let (min, max) = scale.range();
        assert!(min < 5.0 && max > 5.0);
    }
}
