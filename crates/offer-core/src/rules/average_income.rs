//! Average Income Rule
//!
//! Mean monthly income over the trailing window must reach the threshold.

use crate::error::Result;

use super::engine::{Rule, RuleContext};
use super::types::{RuleId, RuleOutcome};

pub struct AverageIncomeRule {
    id: RuleId,
    months: usize,
    threshold: f64,
}

impl AverageIncomeRule {
    pub fn new(id: RuleId, months: usize, threshold: f64) -> Self {
        Self {
            id,
            months,
            threshold,
        }
    }
}

impl Rule for AverageIncomeRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Average Income"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome> {
        let window = ctx.income.trailing(self.months);
        Ok(
            RuleOutcome::at_least(self.id, window.average(), self.threshold)
                .with_window(self.months, window.len()),
        )
    }
}
