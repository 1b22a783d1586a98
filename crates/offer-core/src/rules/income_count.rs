//! Income Count Rule
//!
//! Enough of the trailing months must show positive income.

use crate::error::Result;

use super::engine::{Rule, RuleContext};
use super::types::{RuleId, RuleOutcome};

pub struct IncomeCountRule {
    id: RuleId,
    months: usize,
    min_count: usize,
}

impl IncomeCountRule {
    pub fn new(id: RuleId, months: usize, min_count: usize) -> Self {
        Self {
            id,
            months,
            min_count,
        }
    }
}

impl Rule for IncomeCountRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Income Count"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<RuleOutcome> {
        let window = ctx.income.trailing(self.months);
        let positive = window.positive_count();
        Ok(
            RuleOutcome::at_least(self.id, positive as f64, self.min_count as f64)
                .with_window(self.months, window.len()),
        )
    }
}
