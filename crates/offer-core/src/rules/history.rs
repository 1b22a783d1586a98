//! History Length Rule
//!
//! Counts distinct calendar months across all transactions, not just income
//! months. Reported on the offer but excluded from the eligibility decision.

use crate::error::Result;
use crate::income::distinct_months;

use super::engine::{Rule, RuleContext};
use super::types::{RuleId, RuleOutcome};

pub struct HistoryLengthRule {
    id: RuleId,
    required_months: usize,
}

impl HistoryLengthRule {
    pub fn new(id: RuleId, required_months: usize) -> Self {
        Self {
            id,
            required_months,
        }
    }
}

impl Rule for HistoryLengthRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "History Length"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome> {
        let months = distinct_months(ctx.transactions);
        Ok(RuleOutcome::at_least(
            self.id,
            months as f64,
            self.required_months as f64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::income_by_month;
    use crate::models::Category;
    use crate::test_utils::tx;

    #[test]
    fn test_counts_months_without_income() {
        let transactions: Vec<_> = (1..=12)
            .map(|m| {
                tx(
                    &format!("2024-{:02}-03", m),
                    -40.0,
                    Category::new("DEBIT", "UTILITIES", "Electric"),
                )
            })
            .collect();
        let income = income_by_month(&transactions);
        assert!(income.is_empty());

        let outcome = HistoryLengthRule::new(RuleId::Has12MonthData, 12)
            .evaluate(&RuleContext::new(&transactions, &income))
            .unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.observed, 12.0);
        assert_eq!(outcome.window_months, None);
    }

    #[test]
    fn test_same_month_in_different_years_is_distinct() {
        let transactions = vec![
            tx("2023-03-01", -1.0, Category::default()),
            tx("2024-03-01", -1.0, Category::default()),
            tx("2024-03-20", -1.0, Category::default()),
        ];
        let income = income_by_month(&transactions);

        let outcome = HistoryLengthRule::new(RuleId::Has12MonthData, 12)
            .evaluate(&RuleContext::new(&transactions, &income))
            .unwrap();
        assert_eq!(outcome.observed, 2.0);
        assert!(!outcome.passed);
    }
}
