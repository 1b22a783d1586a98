//! Trailing-window statistics over a monthly income series
//!
//! A window is the N most recent months present in the series. Missing months
//! are never padded with zeros, so a short history yields a short window.

use serde::Serialize;

use crate::income::{MonthlyIncomeSeries, YearMonth};

/// The most recent months of a series, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    /// Requested window length
    pub requested: usize,
    pub months: Vec<(YearMonth, f64)>,
}

impl Window {
    /// Number of months actually in the window (at most `requested`)
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.months.iter().map(|(_, amount)| *amount)
    }

    /// Arithmetic mean, 0 for an empty window
    pub fn average(&self) -> f64 {
        if self.months.is_empty() {
            return 0.0;
        }
        self.values().sum::<f64>() / self.months.len() as f64
    }

    /// Smallest monthly value, 0 for an empty window
    pub fn minimum(&self) -> f64 {
        self.values().reduce(f64::min).unwrap_or(0.0)
    }

    /// Months with strictly positive income
    pub fn positive_count(&self) -> usize {
        self.values().filter(|amount| *amount > 0.0).count()
    }
}

impl MonthlyIncomeSeries {
    /// Select the `months` most recent entries (all of them if fewer exist)
    pub fn trailing(&self, months: usize) -> Window {
        Window {
            requested: months,
            months: self.iter_recent().take(months).collect(),
        }
    }

    pub fn average_over_threshold(&self, months: usize, threshold: f64) -> bool {
        self.trailing(months).average() >= threshold
    }

    pub fn count_over_threshold(&self, months: usize, min_count: usize) -> bool {
        self.trailing(months).positive_count() >= min_count
    }

    pub fn min_over_threshold(&self, months: usize, threshold: f64) -> bool {
        self.trailing(months).minimum() >= threshold
    }
}
