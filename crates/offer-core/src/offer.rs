//! Offer assembly and the evaluation entry points
//!
//! Evaluation is a single pass: validate → aggregate → rules and product →
//! build. Nothing is kept between calls, so identical transactions and an
//! identical timestamp always produce an identical [`Offer`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::income::{income_by_month, MonthlyIncomeSeries};
use crate::models::{Offer, Product, Transaction};
use crate::recommend::recommend_product;
use crate::rules::{RuleContext, RuleEngine, RuleId, RuleResults};

/// Assembles an [`Offer`] from already-computed parts
///
/// Eligibility is derived from the six gating flags when building; the
/// history flag is carried through untouched.
#[derive(Debug, Clone)]
pub struct OfferBuilder {
    applicant_id: String,
    decided_at: DateTime<Utc>,
    product: Product,
    avg_income_12m: bool,
    avg_income_6m: bool,
    avg_income_3m: bool,
    avg_income_1m: bool,
    income_count_12m: bool,
    min_income_6m: bool,
    has_12_month_data: bool,
}

impl OfferBuilder {
    /// Start an offer with every flag false and the lowest product tier
    pub fn new(applicant_id: impl Into<String>, decided_at: DateTime<Utc>) -> Self {
        Self {
            applicant_id: applicant_id.into(),
            decided_at,
            product: Product::VirtualWalletStandard,
            avg_income_12m: false,
            avg_income_6m: false,
            avg_income_3m: false,
            avg_income_1m: false,
            income_count_12m: false,
            min_income_6m: false,
            has_12_month_data: false,
        }
    }

    /// Set one rule flag
    pub fn rule(mut self, rule: RuleId, passed: bool) -> Self {
        let flag = match rule {
            RuleId::AvgIncome12m => &mut self.avg_income_12m,
            RuleId::AvgIncome6m => &mut self.avg_income_6m,
            RuleId::AvgIncome3m => &mut self.avg_income_3m,
            RuleId::AvgIncome1m => &mut self.avg_income_1m,
            RuleId::IncomeCount12m => &mut self.income_count_12m,
            RuleId::MinIncome6m => &mut self.min_income_6m,
            RuleId::Has12MonthData => &mut self.has_12_month_data,
        };
        *flag = passed;
        self
    }

    /// Copy every flag from a rule pass
    pub fn rules(self, results: &RuleResults) -> Self {
        results
            .outcomes()
            .iter()
            .fold(self, |builder, outcome| builder.rule(outcome.rule, outcome.passed))
    }

    pub fn product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    pub fn build(self) -> Offer {
        let eligible_for_offer = self.avg_income_12m
            && self.avg_income_6m
            && self.avg_income_3m
            && self.avg_income_1m
            && self.income_count_12m
            && self.min_income_6m;

        Offer {
            applicant_id: self.applicant_id,
            decided_at: self.decided_at,
            eligible_for_offer,
            recommended_product: self.product,
            avg_income_12m: self.avg_income_12m,
            avg_income_6m: self.avg_income_6m,
            avg_income_3m: self.avg_income_3m,
            avg_income_1m: self.avg_income_1m,
            income_count_12m: self.income_count_12m,
            min_income_6m: self.min_income_6m,
            has_12_month_data: self.has_12_month_data,
        }
    }
}

/// An offer together with the intermediate values that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub offer: Offer,
    pub income: MonthlyIncomeSeries,
    pub mean_monthly_income: f64,
    pub rules: RuleResults,
}

/// Runs the full pipeline for one applicant at a time
#[derive(Default)]
pub struct OfferEvaluator {
    engine: RuleEngine,
}

impl OfferEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `transactions` for `applicant_id` with a fixed decision time
    pub fn evaluate(
        &self,
        applicant_id: &str,
        transactions: &[Transaction],
        decided_at: DateTime<Utc>,
    ) -> Result<Evaluation> {
        validate_transactions(transactions)?;

        let income = income_by_month(transactions);
        let rules = self
            .engine
            .evaluate(&RuleContext::new(transactions, &income))?;
        let mean_monthly_income = income.mean();
        let product = recommend_product(&income);

        debug!(
            applicant = applicant_id,
            mean_monthly_income, "Recommended {}", product
        );

        let offer = OfferBuilder::new(applicant_id, decided_at)
            .rules(&rules)
            .product(product)
            .build();

        info!(
            applicant = applicant_id,
            eligible = offer.eligible_for_offer,
            product = offer.recommended_product.as_str(),
            "Offer evaluated"
        );

        Ok(Evaluation {
            offer,
            income,
            mean_monthly_income,
            rules,
        })
    }
}

/// Reject transactions the pipeline cannot aggregate
///
/// Dates are valid by construction; amounts must be finite.
pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    match transactions.iter().find(|tx| !tx.amount.is_finite()) {
        Some(tx) => Err(Error::InvalidInput(format!(
            "Transaction {} has non-finite amount {}",
            tx.id, tx.amount
        ))),
        None => Ok(()),
    }
}

/// Evaluate an offer, stamping it with the current time
pub fn evaluate_offer(applicant_id: &str, transactions: &[Transaction]) -> Result<Offer> {
    evaluate_offer_at(applicant_id, transactions, Utc::now())
}

/// Evaluate an offer with a caller-supplied decision time
pub fn evaluate_offer_at(
    applicant_id: &str,
    transactions: &[Transaction],
    decided_at: DateTime<Utc>,
) -> Result<Offer> {
    OfferEvaluator::new()
        .evaluate(applicant_id, transactions, decided_at)
        .map(|evaluation| evaluation.offer)
}
