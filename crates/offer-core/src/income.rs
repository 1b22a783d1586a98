//! Monthly income aggregation
//!
//! Filters transactions down to income (CREDIT / INCOME / salary or
//! retirement) and sums them per calendar month. The resulting series is
//! sparse: a month appears only if at least one income transaction fell in it.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::models::{Category, Transaction};

/// Top-level category of income transactions
pub const INCOME_TOP_CATEGORY: &str = "CREDIT";
/// Mid-level category of income transactions
pub const INCOME_MID_CATEGORY: &str = "INCOME";
/// Bottom-level categories that count as recurring income
pub const INCOME_BOTTOM_CATEGORIES: [&str; 2] = ["Paychecks/Salary", "Retirement Income"];

/// A calendar month (no day component)
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns None if `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month (expected YYYY-MM): {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month number: {}", s))?;
        YearMonth::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summed income per calendar month
///
/// Months with no qualifying income are absent rather than zero-valued.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyIncomeSeries {
    months: BTreeMap<YearMonth, f64>,
}

impl MonthlyIncomeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `month`
    pub fn add(&mut self, month: YearMonth, amount: f64) {
        *self.months.entry(month).or_insert(0.0) += amount;
    }

    pub fn get(&self, month: YearMonth) -> Option<f64> {
        self.months.get(&month).copied()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Months in chronological order (oldest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (YearMonth, f64)> + '_ {
        self.months.iter().map(|(month, amount)| (*month, *amount))
    }

    /// Months most recent first
    pub fn iter_recent(&self) -> impl Iterator<Item = (YearMonth, f64)> + '_ {
        self.iter().rev()
    }

    /// Unweighted mean over every month present, 0 when empty
    pub fn mean(&self) -> f64 {
        if self.months.is_empty() {
            return 0.0;
        }
        self.months.values().sum::<f64>() / self.months.len() as f64
    }
}

impl FromIterator<(YearMonth, f64)> for MonthlyIncomeSeries {
    fn from_iter<I: IntoIterator<Item = (YearMonth, f64)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (month, amount) in iter {
            series.add(month, amount);
        }
        series
    }
}

/// Whether a category marks a transaction as recurring income
///
/// All three levels are compared case-insensitively.
pub fn is_income(category: &Category) -> bool {
    category.top.eq_ignore_ascii_case(INCOME_TOP_CATEGORY)
        && category.mid.eq_ignore_ascii_case(INCOME_MID_CATEGORY)
        && INCOME_BOTTOM_CATEGORIES
            .iter()
            .any(|bottom| category.bottom.eq_ignore_ascii_case(bottom))
}

/// Sum income transactions per calendar month
///
/// Input order does not matter. Empty input yields an empty series.
pub fn income_by_month(transactions: &[Transaction]) -> MonthlyIncomeSeries {
    let series: MonthlyIncomeSeries = transactions
        .iter()
        .filter(|tx| is_income(&tx.category))
        .map(|tx| (YearMonth::of(tx.date), tx.amount))
        .collect();

    debug!(
        transactions = transactions.len(),
        income_months = series.len(),
        "Aggregated monthly income"
    );

    series
}

/// Number of distinct calendar months across all transactions, income or not
pub fn distinct_months(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .map(|tx| YearMonth::of(tx.date))
        .collect::<HashSet<_>>()
        .len()
}
