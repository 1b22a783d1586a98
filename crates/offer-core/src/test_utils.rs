//! Transaction fixtures for tests
//!
//! Available under `cfg(test)` and with the `test-utils` feature so the CLI
//! crate can build the same histories in its own tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Months, NaiveDate};

use crate::income::{INCOME_BOTTOM_CATEGORIES, INCOME_MID_CATEGORY, INCOME_TOP_CATEGORY};
use crate::models::{Category, Transaction};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date must be YYYY-MM-DD")
}

/// Category that qualifies as salary income
pub fn salary_category() -> Category {
    Category::new(
        INCOME_TOP_CATEGORY,
        INCOME_MID_CATEGORY,
        INCOME_BOTTOM_CATEGORIES[0],
    )
}

/// Create a transaction with a unique id
pub fn tx(date_str: &str, amount: f64, category: Category) -> Transaction {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    Transaction::new(
        format!("tx_{}", n),
        date(date_str),
        amount,
        format!("fixture {}", n),
        category,
    )
}

/// Create a salary income transaction
pub fn income_tx(date_str: &str, amount: f64) -> Transaction {
    tx(date_str, amount, salary_category())
}

/// One salary transaction per month for `count` consecutive months ending at `latest`
pub fn monthly_salary(latest: &str, count: u32, amount: f64) -> Vec<Transaction> {
    let latest = date(latest);
    (0..count)
        .map(|back| {
            let day = latest
                .checked_sub_months(Months::new(back))
                .expect("fixture month in range");
            income_tx(&day.format("%Y-%m-%d").to_string(), amount)
        })
        .collect()
}
