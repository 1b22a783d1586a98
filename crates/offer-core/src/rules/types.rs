//! Core types for eligibility rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one rule in the fixed eligibility set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// 12-month average income
    #[serde(rename = "avg_income_12m")]
    AvgIncome12m,
    /// 6-month average income
    #[serde(rename = "avg_income_6m")]
    AvgIncome6m,
    /// 3-month average income
    #[serde(rename = "avg_income_3m")]
    AvgIncome3m,
    /// Most recent month's income
    #[serde(rename = "avg_income_1m")]
    AvgIncome1m,
    /// Months with positive income in the last 12
    #[serde(rename = "income_count_12m")]
    IncomeCount12m,
    /// Lowest monthly income in the last 6
    #[serde(rename = "min_income_6m")]
    MinIncome6m,
    /// At least 12 distinct months of transactions
    #[serde(rename = "has_12_month_data")]
    Has12MonthData,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::AvgIncome12m => "avg_income_12m",
            RuleId::AvgIncome6m => "avg_income_6m",
            RuleId::AvgIncome3m => "avg_income_3m",
            RuleId::AvgIncome1m => "avg_income_1m",
            RuleId::IncomeCount12m => "income_count_12m",
            RuleId::MinIncome6m => "min_income_6m",
            RuleId::Has12MonthData => "has_12_month_data",
        }
    }

    /// Whether this rule takes part in the eligibility conjunction
    ///
    /// The history flag is reported but never gates the decision.
    pub fn gates_eligibility(&self) -> bool {
        !matches!(self, RuleId::Has12MonthData)
    }

    pub fn all() -> &'static [RuleId] {
        &[
            RuleId::AvgIncome12m,
            RuleId::AvgIncome6m,
            RuleId::AvgIncome3m,
            RuleId::AvgIncome1m,
            RuleId::IncomeCount12m,
            RuleId::MinIncome6m,
            RuleId::Has12MonthData,
        ]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a rule saw and decided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub passed: bool,
    /// Measured value (average, minimum, or a month count)
    pub observed: f64,
    /// Value the observation was compared against
    pub threshold: f64,
    /// Requested window length, for windowed rules
    pub window_months: Option<usize>,
    /// Months that actually fell in the window
    pub months_considered: usize,
}

impl RuleOutcome {
    /// Outcome for an "observed >= threshold" check
    pub fn at_least(rule: RuleId, observed: f64, threshold: f64) -> Self {
        Self {
            rule,
            passed: observed >= threshold,
            observed,
            threshold,
            window_months: None,
            months_considered: 0,
        }
    }

    pub fn with_window(mut self, requested: usize, considered: usize) -> Self {
        self.window_months = Some(requested);
        self.months_considered = considered;
        self
    }

    pub fn gates_eligibility(&self) -> bool {
        self.rule.gates_eligibility()
    }
}

/// Outcomes of a full rule pass, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleResults {
    outcomes: Vec<RuleOutcome>,
}

impl RuleResults {
    pub fn new(outcomes: Vec<RuleOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn get(&self, rule: RuleId) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.rule == rule)
    }

    /// Whether `rule` was evaluated and passed
    pub fn passed(&self, rule: RuleId) -> bool {
        self.get(rule).is_some_and(|o| o.passed)
    }

    /// Conjunction of every gating rule
    ///
    /// False if any gating rule is missing from the results.
    pub fn eligible(&self) -> bool {
        RuleId::all()
            .iter()
            .filter(|id| id.gates_eligibility())
            .all(|id| self.passed(*id))
    }
}
