//! Eligibility rules
//!
//! A fixed set of threshold checks over the monthly income series. Every rule
//! is a pure function of the shared, read-only [`RuleContext`]; the engine
//! runs them in order and an applicant is eligible only if all gating rules
//! pass.
//!
//! ## Rules
//!
//! - **Average Income** - trailing 12/6/3/1-month mean at least 7500
//! - **Income Count** - at least 10 positive months among the last 12
//! - **Minimum Income** - no month below 5000 among the last 6
//! - **History Length** - 12 distinct transaction months (informational)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use offer_core::rules::{RuleContext, RuleEngine};
//!
//! let income = income_by_month(&transactions);
//! let results = RuleEngine::new().evaluate(&RuleContext::new(&transactions, &income))?;
//! let eligible = results.eligible();
//! ```

pub mod average_income;
pub mod engine;
pub mod history;
pub mod income_count;
pub mod minimum_income;
pub mod policy;
pub mod types;

pub use average_income::AverageIncomeRule;
pub use engine::{Rule, RuleContext, RuleEngine};
pub use history::HistoryLengthRule;
pub use income_count::IncomeCountRule;
pub use minimum_income::MinimumIncomeRule;
pub use types::{RuleId, RuleOutcome, RuleResults};
