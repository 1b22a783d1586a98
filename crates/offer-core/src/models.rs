//! Domain models for offer evaluation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Three-level category labels assigned upstream (e.g. CREDIT / INCOME / Paychecks/Salary)
///
/// Levels may be empty strings but are never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub top: String,
    pub mid: String,
    pub bottom: String,
}

impl Category {
    pub fn new(top: impl Into<String>, mid: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            mid: mid.into(),
            bottom: bottom.into(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.top, self.mid, self.bottom)
    }
}

/// A labeled financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    /// Negative = debit, positive = credit
    pub amount: f64,
    pub description: String,
    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            description: description.into(),
            category,
        }
    }
}

/// An applicant and the transaction history their offer is evaluated on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub applicant_id: String,
    pub transactions: Vec<Transaction>,
}

/// Product tiers that can be recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "Virtual Wallet Standard")]
    VirtualWalletStandard,
    #[serde(rename = "Virtual Wallet Performance Spend")]
    VirtualWalletPerformanceSpend,
    #[serde(rename = "Virtual Wallet Performance Select")]
    VirtualWalletPerformanceSelect,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VirtualWalletStandard => "Virtual Wallet Standard",
            Self::VirtualWalletPerformanceSpend => "Virtual Wallet Performance Spend",
            Self::VirtualWalletPerformanceSelect => "Virtual Wallet Performance Select",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of one offer evaluation
///
/// Built once by [`crate::offer::OfferBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub applicant_id: String,
    /// When the decision was made (captured once per evaluation)
    pub decided_at: DateTime<Utc>,
    /// Conjunction of the six gating rules
    pub eligible_for_offer: bool,
    pub recommended_product: Product,
    pub avg_income_12m: bool,
    pub avg_income_6m: bool,
    pub avg_income_3m: bool,
    pub avg_income_1m: bool,
    pub income_count_12m: bool,
    pub min_income_6m: bool,
    /// Informational only; does not gate eligibility
    pub has_12_month_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display_names() {
        assert_eq!(
            Product::VirtualWalletStandard.to_string(),
            "Virtual Wallet Standard"
        );
        assert_eq!(
            Product::VirtualWalletPerformanceSelect.to_string(),
            "Virtual Wallet Performance Select"
        );
    }

    #[test]
    fn test_product_serializes_as_display_name() {
        let json = serde_json::to_string(&Product::VirtualWalletPerformanceSpend).unwrap();
        assert_eq!(json, "\"Virtual Wallet Performance Spend\"");
    }

    #[test]
    fn test_category_defaults_missing_levels_to_empty() {
        let category: Category = serde_json::from_str(r#"{"top": "CREDIT"}"#).unwrap();
        assert_eq!(category.top, "CREDIT");
        assert_eq!(category.mid, "");
        assert_eq!(category.bottom, "");
    }
}
