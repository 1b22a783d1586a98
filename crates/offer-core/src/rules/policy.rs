//! Eligibility policy constants
//!
//! Changing a value here changes who qualifies; none of these are read from
//! user configuration.

/// Minimum trailing average monthly income for every average rule
pub const AVERAGE_INCOME_THRESHOLD: f64 = 7500.0;

/// Window lengths (months) checked against [`AVERAGE_INCOME_THRESHOLD`]
pub const AVERAGE_INCOME_WINDOWS: [usize; 4] = [12, 6, 3, 1];

/// Window for the income-count rule
pub const INCOME_COUNT_WINDOW: usize = 12;

/// Months with positive income required within [`INCOME_COUNT_WINDOW`]
pub const MIN_INCOME_MONTHS: usize = 10;

/// Window for the minimum-income rule
pub const MIN_INCOME_WINDOW: usize = 6;

/// Lowest acceptable monthly income within [`MIN_INCOME_WINDOW`]
pub const MIN_INCOME_THRESHOLD: f64 = 5000.0;

/// Distinct transaction months needed for the history flag
pub const HISTORY_MONTHS_REQUIRED: usize = 12;

/// Mean monthly income at which Performance Spend is recommended
pub const PERFORMANCE_SPEND_FLOOR: f64 = 2000.0;

/// Mean monthly income at which Performance Select is recommended
pub const PERFORMANCE_SELECT_FLOOR: f64 = 5000.0;
