//! Minimum Income Rule
//!
//! No month in the trailing window may fall below the threshold.

use crate::error::Result;

use super::engine::{Rule, RuleContext};
use super::types::{RuleId, RuleOutcome};

pub struct MinimumIncomeRule {
    id: RuleId,
    months: usize,
    threshold: f64,
}

impl MinimumIncomeRule {
    pub fn new(id: RuleId, months: usize, threshold: f64) -> Self {
        Self {
            id,
            months,
            threshold,
        }
    }
}

impl Rule for MinimumIncomeRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Minimum Income"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome> {
        let window = ctx.income.trailing(self.months);
        Ok(
            RuleOutcome::at_least(self.id, window.minimum(), self.threshold)
                .with_window(self.months, window.len()),
        )
    }
}
