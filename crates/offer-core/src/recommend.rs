//! Product tier recommendation
//!
//! The tier depends only on the unweighted mean of every month in the income
//! series; it is independent of the eligibility rules.

use crate::income::MonthlyIncomeSeries;
use crate::models::Product;
use crate::rules::policy::{PERFORMANCE_SELECT_FLOOR, PERFORMANCE_SPEND_FLOOR};

/// Map a mean monthly income to a product tier
pub fn product_for_income(mean_monthly_income: f64) -> Product {
    if mean_monthly_income >= PERFORMANCE_SELECT_FLOOR {
        Product::VirtualWalletPerformanceSelect
    } else if mean_monthly_income >= PERFORMANCE_SPEND_FLOOR {
        Product::VirtualWalletPerformanceSpend
    } else {
        Product::VirtualWalletStandard
    }
}

/// Recommend a product for an income series (empty series → lowest tier)
pub fn recommend_product(income: &MonthlyIncomeSeries) -> Product {
    product_for_income(income.mean())
}
