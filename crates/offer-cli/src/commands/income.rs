//! Monthly income breakdown command

use std::path::Path;

use anyhow::Result;
use offer_core::income::income_by_month;
use offer_core::recommend::recommend_product;
use offer_core::rules::policy::AVERAGE_INCOME_WINDOWS;
use offer_core::{MonthlyIncomeSeries, Product};
use serde::Serialize;

use super::{open_applicant, OutputFormat};

/// Statistics for one trailing window
#[derive(Debug, Serialize)]
pub struct WindowSummary {
    pub months: usize,
    pub months_present: usize,
    pub average: f64,
    pub minimum: f64,
    pub positive_months: usize,
}

#[derive(Debug, Serialize)]
pub struct IncomeReport {
    pub applicant_id: String,
    pub months: MonthlyIncomeSeries,
    pub windows: Vec<WindowSummary>,
    pub mean_monthly_income: f64,
    pub recommended_product: Product,
}

impl IncomeReport {
    pub fn new(applicant_id: impl Into<String>, months: MonthlyIncomeSeries) -> Self {
        let windows = AVERAGE_INCOME_WINDOWS
            .iter()
            .map(|&n| {
                let window = months.trailing(n);
                WindowSummary {
                    months: n,
                    months_present: window.len(),
                    average: window.average(),
                    minimum: window.minimum(),
                    positive_months: window.positive_count(),
                }
            })
            .collect();

        Self {
            applicant_id: applicant_id.into(),
            mean_monthly_income: months.mean(),
            recommended_product: recommend_product(&months),
            windows,
            months,
        }
    }
}

pub fn cmd_income(file: &Path, applicant: Option<&str>, format: OutputFormat) -> Result<()> {
    // A CSV breakdown needs no real applicant id; label it with the file name
    let is_csv = file
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let label = match applicant {
        Some(id) => Some(id.to_string()),
        None if is_csv => file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned()),
        None => None,
    };
    let applicant = open_applicant(file, label.as_deref())?;

    let report = IncomeReport::new(
        applicant.applicant_id,
        income_by_month(&applicant.transactions),
    );

    let output = match format {
        OutputFormat::Text => render_income(&report),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
    };
    print!("{}", output);

    Ok(())
}

pub fn render_income(report: &IncomeReport) -> String {
    let mut lines = vec![
        String::new(),
        format!("💰 Monthly Income for {}", report.applicant_id),
        "   ─────────────────────────────────────────────────────────────".to_string(),
    ];

    if report.months.is_empty() {
        lines.push("   No income transactions found.".to_string());
    } else {
        lines.push(format!("   {:8} │ {:>12}", "Month", "Income"));
        lines.push("   ─────────┼──────────────".to_string());
        lines.extend(
            report
                .months
                .iter_recent()
                .map(|(month, amount)| format!("   {:8} │ {:>12.2}", month.to_string(), amount)),
        );
    }

    lines.push(String::new());
    lines.push(format!(
        "   {:>6} │ {:>7} │ {:>12} │ {:>12} │ {:>8}",
        "Window", "Present", "Average", "Minimum", "Positive"
    ));
    lines.push("   ───────┼─────────┼──────────────┼──────────────┼─────────".to_string());
    lines.extend(report.windows.iter().map(|w| {
        format!(
            "   {:>5}m │ {:>7} │ {:>12.2} │ {:>12.2} │ {:>8}",
            w.months, w.months_present, w.average, w.minimum, w.positive_months
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "   Mean monthly income: ${:.2} → {}",
        report.mean_monthly_income, report.recommended_product
    ));

    lines.join("\n") + "\n"
}
