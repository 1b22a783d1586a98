//! Offer evaluation command

use std::path::Path;

use anyhow::{Context, Result};
use offer_core::{Evaluation, OfferEvaluator, RuleOutcome};

use super::{open_applicant, resolve_decided_at, OutputFormat};

pub fn cmd_evaluate(
    file: &Path,
    applicant: Option<&str>,
    as_of: Option<&str>,
    format: OutputFormat,
    explain: bool,
) -> Result<()> {
    let decided_at = resolve_decided_at(as_of)?;
    let applicant = open_applicant(file, applicant)?;

    tracing::debug!(
        applicant = applicant.applicant_id.as_str(),
        transactions = applicant.transactions.len(),
        "Loaded applicant"
    );

    let evaluation = OfferEvaluator::new()
        .evaluate(&applicant.applicant_id, &applicant.transactions, decided_at)
        .with_context(|| format!("Failed to evaluate applicant {}", applicant.applicant_id))?;

    let output = match format {
        OutputFormat::Text => render_evaluation(&evaluation, explain),
        OutputFormat::Json => render_evaluation_json(&evaluation, explain)?,
    };
    print!("{}", output);

    Ok(())
}

/// JSON output: the offer alone, or the full evaluation with `explain`
pub fn render_evaluation_json(evaluation: &Evaluation, explain: bool) -> Result<String> {
    let json = if explain {
        serde_json::to_string_pretty(evaluation)?
    } else {
        serde_json::to_string_pretty(&evaluation.offer)?
    };
    Ok(format!("{}\n", json))
}

fn status(passed: bool) -> &'static str {
    if passed {
        "✅ pass"
    } else {
        "❌ fail"
    }
}

fn describe(outcome: &RuleOutcome) -> String {
    let window = match outcome.window_months {
        Some(months) => format!("last {} ({} present)", months, outcome.months_considered),
        None => "all transactions".to_string(),
    };
    format!(
        "{:>10.2} ≥ {:<10.2} {}",
        outcome.observed, outcome.threshold, window
    )
}

pub fn render_evaluation(evaluation: &Evaluation, explain: bool) -> String {
    let offer = &evaluation.offer;
    let eligible = if offer.eligible_for_offer {
        "✅ yes"
    } else {
        "❌ no"
    };

    let mut lines = vec![
        String::new(),
        format!("📋 Offer for {}", offer.applicant_id),
        format!("   Decided: {}", offer.decided_at.to_rfc3339()),
        "   ─────────────────────────────────────────────────────────────".to_string(),
        format!("   Eligible: {}", eligible),
        format!("   Product:  {}", offer.recommended_product),
        format!(
            "   Mean monthly income: ${:.2} over {} month(s)",
            evaluation.mean_monthly_income,
            evaluation.income.len()
        ),
        String::new(),
        format!("   {:20} │ {:8}", "Rule", "Result"),
        "   ─────────────────────┼──────────".to_string(),
    ];

    for outcome in evaluation.rules.outcomes() {
        let mut line = format!("   {:20} │ {}", outcome.rule.as_str(), status(outcome.passed));
        if !outcome.gates_eligibility() {
            line.push_str(" (informational)");
        }
        if explain {
            line.push_str(&format!("  {}", describe(outcome)));
        }
        lines.push(line);
    }

    lines.join("\n") + "\n"
}
