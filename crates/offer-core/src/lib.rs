//! Offer Core Library
//!
//! Income-based offer evaluation for a single applicant:
//! - Monthly income aggregation from labeled transactions
//! - Trailing-window statistics over the monthly series
//! - Fixed eligibility rules with per-rule outcomes
//! - Product tier recommendation
//! - Offer assembly
//! - CSV and JSON transaction loading

pub mod error;
pub mod import;
pub mod income;
pub mod models;
pub mod offer;
pub mod recommend;
pub mod rules;
pub mod window;

/// Transaction fixtures for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use import::{load_applicant, parse_applicant_json, parse_csv, RawAmount, RawTransaction};
pub use income::{income_by_month, MonthlyIncomeSeries, YearMonth};
pub use models::{Applicant, Category, Offer, Product, Transaction};
pub use offer::{evaluate_offer, evaluate_offer_at, Evaluation, OfferBuilder, OfferEvaluator};
pub use recommend::recommend_product;
pub use rules::{RuleEngine, RuleId, RuleOutcome, RuleResults};
pub use window::Window;
