//! Base-10 logarithmic scale.

use super::{nice_ticks, Scale};
use crate::plotting::error::{PlotError, PlotResult};

/// A log10 scale. Only positive values can be placed on it.
#[derive(Debug, Clone)]
pub struct LogScale {
    min: f64,
    max: f64,
}

impl LogScale {
    pub fn auto() -> Self {
        LogScale { min: 1.0, max: 10.0 }
    }

    fn decades(&self) -> (i32, i32) {
        let lo = self.min.min(self.max).log10().floor() as i32;
        let hi = self.min.max(self.max).log10().ceil() as i32;
        (lo, hi)
    }

    fn in_range(&self, value: f64) -> bool {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        value >= lo * (1.0 - 1e-9) && value <= hi * (1.0 + 1e-9)
    }
}

impl Default for LogScale {
    fn default() -> Self {
        LogScale::auto()
    }
}

impl Scale for LogScale {
    fn name(&self) -> &'static str {
        "log"
    }

    fn transform(&self, value: f64) -> f64 {
        let lo = self.min.log10();
        let hi = self.max.log10();
        if hi == lo {
            return 0.5;
        }
        (value.log10() - lo) / (hi - lo)
    }

    fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value > 0.0
    }

    fn set_range(&mut self, min: f64, max: f64) -> PlotResult<()> {
        if min <= 0.0 || max <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "log scale limits must be positive, got ({}, {})",
                min, max
            )));
        }
        if min == max {
            self.min = min / 10.0;
            self.max = max * 10.0;
        } else {
            self.min = min;
            self.max = max;
        }
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, num_ticks: usize) -> Vec<f64> {
        let (lo, hi) = self.decades();
        let ticks: Vec<f64> = (lo..=hi)
            .map(|e| 10_f64.powi(e))
            .filter(|t| self.in_range(*t))
            .collect();
        if ticks.len() >= 2 {
            return ticks;
        }
        // Less than a decade visible: fall back to linear ticks.
        nice_ticks(self.min.min(self.max), self.min.max(self.max), num_ticks)
            .into_iter()
            .filter(|t| *t > 0.0)
            .collect()
    }

    fn minor_ticks(&self, _num_ticks: usize) -> Vec<f64> {
        let (lo, hi) = self.decades();
        (lo..hi)
            .flat_map(|e| (2..10).map(move |m| m as f64 * 10_f64.powi(e)))
            .filter(|t| self.in_range(*t))
            .collect()
    }

    fn format_tick(&self, value: f64) -> Option<String> {
        let exp = value.log10();
        if (exp - exp.round()).abs() < 1e-9 {
            Some(format!("1e{}", exp.round() as i32))
        } else {
            None
        }
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_limits() {
        let mut scale = LogScale::auto();
        assert!(scale.set_range(0.0, 100.0).is_err());
        assert!(scale.set_range(-1.0, 100.0).is_err());
    }

    #[test]
    fn test_decade_ticks() {
        let mut scale = LogScale::auto();
        scale.set_range(0.1, 1000.0).unwrap();
        assert_eq!(scale.ticks(5), vec![0.1, 1.0, 10.0, 100.0, 1000.0]);
        assert!((scale.transform(10.0) - 0.5).abs() < 1e-12);
        assert!(!scale.accepts(0.0));
    }

    #[test]
    fn test_minor_ticks_between_decades() {
        let mut scale = LogScale::auto();
        scale.set_range(1.0, 100.0).unwrap();
        let minor = scale.minor_ticks(5);
        assert_eq!(minor.len(), 16);
        assert!(minor.contains(&2.0));
        assert!(minor.contains(&90.0));
    }
}
