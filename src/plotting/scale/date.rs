//! Date scale: values are days since 1970-01-01.
//!
//! Major ticks fall on the first day of each year and are labelled with a
//! `chrono` format string (default `%Y`); minor ticks fall on the first day of
//! each month.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::Scale;
use crate::plotting::error::PlotResult;

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Beyond this many ticks the locator thins itself out.
const MAX_MAJOR_TICKS: usize = 12;
const MAX_MINOR_TICKS: usize = 240;

/// Convert a calendar date to a plot value.
pub fn date_to_num(date: NaiveDate) -> f64 {
    (date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) as f64
}

/// Convert a timestamp to a plot value, keeping the time of day as a fraction.
pub fn datetime_to_num(dt: NaiveDateTime) -> f64 {
    let seconds = dt.time().num_seconds_from_midnight() as f64;
    date_to_num(dt.date()) + seconds / 86_400.0
}

/// Convert a plot value back to the calendar date it falls on.
pub fn num_to_date(value: f64) -> Option<NaiveDate> {
    if !value.is_finite() {
        return None;
    }
    let days = i32::try_from(value.floor() as i64).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

/// Linear scale over date numbers with calendar-aware locators.
#[derive(Debug, Clone)]
pub struct DateScale {
    min: f64,
    max: f64,
    format: String,
}

impl DateScale {
    pub fn new() -> Self {
        DateScale {
            min: 0.0,
            max: 365.0,
            format: "%Y".to_string(),
        }
    }

    /// Set the `chrono` format used for major tick labels.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    fn bounds(&self) -> (f64, f64) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    fn year_starts(&self) -> Vec<f64> {
        let (lo, hi) = self.bounds();
        let (Some(first), Some(last)) = (num_to_date(lo), num_to_date(hi)) else {
            return Vec::new();
        };
        (first.year()..=last.year() + 1)
            .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .map(date_to_num)
            .filter(|v| *v >= lo && *v <= hi)
            .collect()
    }

    fn month_starts(&self) -> Vec<f64> {
        let (lo, hi) = self.bounds();
        let (Some(first), Some(last)) = (num_to_date(lo), num_to_date(hi)) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for year in first.year()..=last.year() {
            for month in 1..=12 {
                if let Some(d) = NaiveDate::from_ymd_opt(year, month, 1) {
                    let v = date_to_num(d);
                    if v >= lo && v <= hi {
                        out.push(v);
                    }
                }
            }
        }
        out
    }
}

impl Default for DateScale {
    fn default() -> Self {
        DateScale::new()
    }
}

/// Keep every n-th tick so at most `max` remain.
fn thin(ticks: Vec<f64>, max: usize) -> Vec<f64> {
    if ticks.len() <= max || max == 0 {
        return ticks;
    }
    let step = ticks.len().div_ceil(max);
    ticks.into_iter().step_by(step).collect()
}

impl Scale for DateScale {
    fn name(&self) -> &'static str {
        "date"
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
            self.min = min - 1.0;
            self.max = max + 1.0;
        } else {
            self.min = min;
            self.max = max;
        }
        Ok(())
    }

    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn ticks(&self, _num_ticks: usize) -> Vec<f64> {
        thin(self.year_starts(), MAX_MAJOR_TICKS)
    }

    fn minor_ticks(&self, _num_ticks: usize) -> Vec<f64> {
        let months = self.month_starts();
        if months.len() > MAX_MINOR_TICKS {
            return Vec::new();
        }
        months
    }

    fn format_tick(&self, value: f64) -> Option<String> {
        num_to_date(value).map(|d| d.format(&self.format).to_string())
    }

    fn clone_box(&self) -> Box<dyn Scale> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(date_to_num(ymd(1970, 1, 1)), 0.0);
        assert_eq!(date_to_num(ymd(1970, 1, 2)), 1.0);
        assert_eq!(num_to_date(0.5), Some(ymd(1970, 1, 1)));
    }

    #[test]
    fn test_datetime_fraction() {
        let dt = ymd(1970, 1, 2).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(datetime_to_num(dt), 1.5);
    }

    #[test]
    fn test_yearly_major_monthly_minor() {
        let mut scale = DateScale::new();
        scale
            .set_range(date_to_num(ymd(2010, 6, 1)), date_to_num(ymd(2013, 6, 1)))
            .unwrap();
        let major = scale.ticks(5);
        assert_eq!(major.len(), 3);
        assert_eq!(scale.format_tick(major[0]).as_deref(), Some("2011"));
        assert_eq!(scale.minor_ticks(5).len(), 37);
    }

    #[test]
    fn test_long_ranges_are_thinned() {
        let mut scale = DateScale::new();
        scale
            .set_range(date_to_num(ymd(1900, 1, 1)), date_to_num(ymd(2000, 1, 1)))
            .unwrap();
        assert!(scale.ticks(5).len() <= MAX_MAJOR_TICKS);
        assert!(scale.minor_ticks(5).is_empty());
    }
}
