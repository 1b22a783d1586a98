//! Rule Engine - evaluates the fixed eligibility rule set

use tracing::debug;

use crate::error::{Error, Result};
use crate::income::MonthlyIncomeSeries;
use crate::models::Transaction;

use super::policy::{
    AVERAGE_INCOME_THRESHOLD, AVERAGE_INCOME_WINDOWS, HISTORY_MONTHS_REQUIRED,
    INCOME_COUNT_WINDOW, MIN_INCOME_MONTHS, MIN_INCOME_THRESHOLD, MIN_INCOME_WINDOW,
};
use super::types::{RuleId, RuleOutcome, RuleResults};
use super::{AverageIncomeRule, HistoryLengthRule, IncomeCountRule, MinimumIncomeRule};

/// Read-only inputs shared by every rule in one evaluation
pub struct RuleContext<'a> {
    /// Raw transactions (the history rule counts months over these)
    pub transactions: &'a [Transaction],
    /// Monthly income built from `transactions`
    pub income: &'a MonthlyIncomeSeries,
}

impl<'a> RuleContext<'a> {
    pub fn new(transactions: &'a [Transaction], income: &'a MonthlyIncomeSeries) -> Self {
        Self {
            transactions,
            income,
        }
    }
}

/// A single eligibility check
pub trait Rule: Send + Sync {
    /// Identifier reported on the offer
    fn id(&self) -> RuleId;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate against the shared context
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome>;
}

/// Runs the built-in rules in a fixed order
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create an engine holding the full policy rule set
    pub fn new() -> Self {
        let average_ids = [
            RuleId::AvgIncome12m,
            RuleId::AvgIncome6m,
            RuleId::AvgIncome3m,
            RuleId::AvgIncome1m,
        ];

        let mut rules: Vec<Box<dyn Rule>> = average_ids
            .into_iter()
            .zip(AVERAGE_INCOME_WINDOWS)
            .map(|(id, months)| {
                Box::new(AverageIncomeRule::new(id, months, AVERAGE_INCOME_THRESHOLD))
                    as Box<dyn Rule>
            })
            .collect();

        rules.push(Box::new(IncomeCountRule::new(
            RuleId::IncomeCount12m,
            INCOME_COUNT_WINDOW,
            MIN_INCOME_MONTHS,
        )));
        rules.push(Box::new(MinimumIncomeRule::new(
            RuleId::MinIncome6m,
            MIN_INCOME_WINDOW,
            MIN_INCOME_THRESHOLD,
        )));
        rules.push(Box::new(HistoryLengthRule::new(
            RuleId::Has12MonthData,
            HISTORY_MONTHS_REQUIRED,
        )));

        Self { rules }
    }

    /// Evaluate every rule
    ///
    /// Any failing rule fails the whole pass; no flag is ever defaulted.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleResults> {
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let outcome = rule.evaluate(ctx)?;

            if !outcome.observed.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "{} produced a non-finite value",
                    rule.name()
                )));
            }

            debug!(
                rule = rule.id().as_str(),
                observed = outcome.observed,
                threshold = outcome.threshold,
                passed = outcome.passed,
                "Rule evaluated"
            );
            outcomes.push(outcome);
        }

        Ok(RuleResults::new(outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::income::income_by_month;
    use crate::models::Category;
    use crate::test_utils::{income_tx, monthly_salary, tx};

    fn run(transactions: &[Transaction]) -> RuleResults {
        let income = income_by_month(transactions);
        RuleEngine::new()
            .evaluate(&RuleContext::new(transactions, &income))
            .unwrap()
    }

    #[test]
    fn test_engine_reports_every_rule_once() {
        let ids: Vec<RuleId> = run(&[]).outcomes().iter().map(|o| o.rule).collect();
        assert_eq!(ids, RuleId::all().to_vec());
    }

    #[test]
    fn test_single_large_paycheck() {
        let results = run(&[income_tx("2024-05-15", 8000.0)]);

        assert!(results.passed(RuleId::AvgIncome1m));
        assert!(results.passed(RuleId::AvgIncome3m));
        assert!(results.passed(RuleId::AvgIncome6m));
        assert!(results.passed(RuleId::AvgIncome12m));
        assert!(!results.passed(RuleId::IncomeCount12m));
        assert!(results.passed(RuleId::MinIncome6m));
        assert!(!results.passed(RuleId::Has12MonthData));
        assert!(!results.eligible());
    }

    #[test]
    fn test_twelve_months_at_5000() {
        let results = run(&monthly_salary("2024-12-01", 12, 5000.0));

        assert!(!results.passed(RuleId::AvgIncome12m));
        assert!(results.passed(RuleId::IncomeCount12m));
        assert!(results.passed(RuleId::MinIncome6m));
        assert!(results.passed(RuleId::Has12MonthData));
        assert!(!results.eligible());
    }

    #[test]
    fn test_twelve_months_at_8000_is_eligible() {
        let results = run(&monthly_salary("2024-12-01", 12, 8000.0));

        assert!(results.eligible());
        let count = results.get(RuleId::IncomeCount12m).unwrap();
        assert_eq!(count.observed, 12.0);
        assert_eq!(count.threshold, 10.0);
        assert_eq!(count.window_months, Some(12));
    }

    #[test]
    fn test_eligible_without_twelve_months_of_data() {
        // Ten months of strong income passes every gating rule but not the history flag
        let results = run(&monthly_salary("2024-10-01", 10, 9000.0));

        assert!(!results.passed(RuleId::Has12MonthData));
        assert!(results.eligible());
    }

    #[test]
    fn test_empty_history_fails_every_rule() {
        let results = run(&[]);
        for outcome in results.outcomes() {
            assert!(!outcome.passed, "{} should fail", outcome.rule);
        }
        assert!(!results.eligible());
    }

    #[test]
    fn test_non_finite_income_fails_evaluation() {
        let transactions = vec![
            income_tx("2024-01-05", f64::MAX),
            income_tx("2024-01-06", f64::MAX),
            tx("2024-01-07", -1.0, Category::default()),
        ];
        let income = income_by_month(&transactions);

        let result = RuleEngine::new().evaluate(&RuleContext::new(&transactions, &income));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
