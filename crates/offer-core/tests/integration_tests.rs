//! Integration tests for offer-core
//!
//! These tests exercise the full load → aggregate → rules → offer workflow.

use chrono::{DateTime, TimeZone, Utc};
use offer_core::{
    evaluate_offer_at, income_by_month, parse_applicant_json, parse_csv, Error, OfferEvaluator,
    Product, RuleId, YearMonth,
};

const HEADER: &str = "id,date,amount,description,category_top,category_mid,category_bottom";

fn decided_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 31, 9, 0, 0).unwrap()
}

/// Build a CSV with one salary row per month of 2024 (Jan..=`months`) plus a
/// grocery debit in each of those months
fn salary_csv(months: u32, amount: f64) -> String {
    let mut csv = String::from(HEADER);
    for m in 1..=months {
        csv.push_str(&format!(
            "\npay{m},2024-{m:02}-25,{amount},ACME PAYROLL,CREDIT,INCOME,Paychecks/Salary"
        ));
        csv.push_str(&format!(
            "\ngro{m},2024-{m:02}-03,-84.10,GROCER,DEBIT,FOOD,Groceries"
        ));
    }
    csv
}

// =============================================================================
// CSV Workflow Tests
// =============================================================================

#[test]
fn test_strong_steady_income_is_eligible() {
    let transactions = parse_csv(salary_csv(12, 8200.0).as_bytes()).unwrap();
    assert_eq!(transactions.len(), 24);

    let offer = evaluate_offer_at("applicant-1", &transactions, decided_at()).unwrap();

    assert!(offer.eligible_for_offer);
    assert!(offer.has_12_month_data);
    assert_eq!(
        offer.recommended_product,
        Product::VirtualWalletPerformanceSelect
    );
    assert_eq!(offer.decided_at, decided_at());
}

#[test]
fn test_twelve_months_of_5000_scenario() {
    let transactions = parse_csv(salary_csv(12, 5000.0).as_bytes()).unwrap();

    let offer = evaluate_offer_at("applicant-2", &transactions, decided_at()).unwrap();

    assert!(!offer.avg_income_12m);
    assert!(offer.income_count_12m);
    assert!(offer.min_income_6m);
    assert!(offer.has_12_month_data);
    assert!(!offer.eligible_for_offer);
    assert_eq!(
        offer.recommended_product,
        Product::VirtualWalletPerformanceSelect
    );
}

#[test]
fn test_twelve_months_below_5000_scenario() {
    let transactions = parse_csv(salary_csv(12, 4999.0).as_bytes()).unwrap();

    let offer = evaluate_offer_at("applicant-2b", &transactions, decided_at()).unwrap();

    assert!(offer.income_count_12m);
    assert!(!offer.min_income_6m);
    assert!(offer.has_12_month_data);
    assert!(!offer.eligible_for_offer);
    assert_eq!(
        offer.recommended_product,
        Product::VirtualWalletPerformanceSpend
    );
}

#[test]
fn test_recent_income_drop_fails_short_windows() {
    // Nine strong months, then three weak ones at the end of the year
    let mut csv = String::from(HEADER);
    for m in 1..=12u32 {
        let amount = if m <= 9 { 9000.0 } else { 4000.0 };
        csv.push_str(&format!(
            "\np{m},2024-{m:02}-15,{amount},PAYROLL,CREDIT,INCOME,Paychecks/Salary"
        ));
    }
    let transactions = parse_csv(csv.as_bytes()).unwrap();

    let evaluation = OfferEvaluator::new()
        .evaluate("applicant-3", &transactions, decided_at())
        .unwrap();
    let offer = &evaluation.offer;

    // 12m mean = (9 * 9000 + 3 * 4000) / 12 = 7750
    assert!(offer.avg_income_12m);
    assert!(!offer.avg_income_6m);
    assert!(!offer.avg_income_3m);
    assert!(!offer.avg_income_1m);
    assert!(!offer.min_income_6m);
    assert!(offer.income_count_12m);
    assert!(!offer.eligible_for_offer);

    let min = evaluation.rules.get(RuleId::MinIncome6m).unwrap();
    assert_eq!(min.observed, 4000.0);
    assert_eq!(min.months_considered, 6);
}

#[test]
fn test_retirement_income_counts_and_mixed_case_labels() {
    let csv = format!(
        "{HEADER}\n\
         r1,2024-11-01,6000,PENSION,credit,income,retirement income\n\
         r2,2024-12-01,6000,PENSION,Credit,Income,Retirement Income\n\
         x1,2024-12-05,9000,TRANSFER IN,CREDIT,TRANSFER,Internal"
    );
    let transactions = parse_csv(csv.as_bytes()).unwrap();

    let income = income_by_month(&transactions);
    assert_eq!(income.len(), 2);
    assert_eq!(income.get(YearMonth::new(2024, 12).unwrap()), Some(6000.0));
}

#[test]
fn test_history_flag_uses_all_transactions() {
    // Twelve months of debits, no income at all
    let mut csv = String::from(HEADER);
    for m in 1..=12u32 {
        csv.push_str(&format!(
            "\nd{m},2024-{m:02}-09,-120.00,POWER CO,DEBIT,UTILITIES,Electric"
        ));
    }
    let transactions = parse_csv(csv.as_bytes()).unwrap();

    let offer = evaluate_offer_at("applicant-4", &transactions, decided_at()).unwrap();

    assert!(offer.has_12_month_data);
    assert!(!offer.eligible_for_offer);
    assert!(!offer.avg_income_1m);
    assert!(!offer.min_income_6m);
    assert_eq!(offer.recommended_product, Product::VirtualWalletStandard);
}

#[test]
fn test_malformed_row_aborts_evaluation_input() {
    let csv = format!(
        "{HEADER}\n\
         ok,2024-11-01,6000,PAYROLL,CREDIT,INCOME,Paychecks/Salary\n\
         bad,2024-11-31,6000,PAYROLL,CREDIT,INCOME,Paychecks/Salary"
    );

    let err = parse_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

// =============================================================================
// JSON Workflow Tests
// =============================================================================

#[test]
fn test_json_applicant_round_trip_to_offer() {
    let json = r#"{
        "applicant_id": "json-1",
        "transactions": [
            {"id": "a", "date": "2024-12-20", "amount": 8000,
             "category": {"top": "CREDIT", "mid": "INCOME", "bottom": "Paychecks/Salary"}}
        ]
    }"#;
    let applicant = parse_applicant_json(json.as_bytes(), None).unwrap();

    let offer =
        evaluate_offer_at(&applicant.applicant_id, &applicant.transactions, decided_at()).unwrap();

    assert_eq!(offer.applicant_id, "json-1");
    assert!(offer.avg_income_1m);
    assert!(offer.avg_income_12m);
    assert!(!offer.income_count_12m);
    assert!(offer.min_income_6m);
    assert!(!offer.eligible_for_offer);
    assert_eq!(
        offer.recommended_product,
        Product::VirtualWalletPerformanceSelect
    );

    let value = serde_json::to_value(&offer).unwrap();
    assert_eq!(value["recommended_product"], "Virtual Wallet Performance Select");
    assert_eq!(value["has_12_month_data"], false);
}

#[test]
fn test_repeated_evaluation_yields_identical_offers() {
    let transactions = parse_csv(salary_csv(7, 7600.0).as_bytes()).unwrap();

    let offers: Vec<_> = (0..3)
        .map(|_| evaluate_offer_at("applicant-5", &transactions, decided_at()).unwrap())
        .collect();

    assert!(offers.windows(2).all(|pair| pair[0] == pair[1]));
}
