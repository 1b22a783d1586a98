//! Loading labeled transactions from CSV and JSON
//!
//! Rows are read into [`RawTransaction`] first and validated one by one. A
//! malformed row aborts the whole load; rows are never skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Applicant, Category, Transaction};

/// Amount as found in the input: a JSON number or free text like "$1,234.56"
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

/// An unvalidated transaction row
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub id: Option<String>,
    pub date: String,
    pub amount: RawAmount,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
}

impl RawTransaction {
    /// Parse date and amount; `position` (0-based) is used for messages and generated ids
    pub fn validate(self, position: usize) -> Result<Transaction> {
        let row_error = |msg: String| Error::InvalidInput(format!("Row {}: {}", position + 1, msg));

        let date = parse_date(&self.date).map_err(row_error)?;
        let amount = match &self.amount {
            RawAmount::Number(n) => *n,
            RawAmount::Text(s) => parse_amount(s).map_err(row_error)?,
        };
        if !amount.is_finite() {
            return Err(row_error("amount is not a finite number".into()));
        }

        let id = match self.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => generate_id(&date, &self.description, amount, position),
        };

        Ok(Transaction::new(
            id,
            date,
            amount,
            self.description,
            self.category,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct RawApplicant {
    #[serde(default)]
    applicant_id: Option<String>,
    transactions: Vec<RawTransaction>,
}

/// Generate a stable id for rows that arrive without one
///
/// Position is included so identical rows on the same day stay distinct.
fn generate_id(date: &NaiveDate, description: &str, amount: f64, position: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.to_string().as_bytes());
    hasher.update(description.as_bytes());
    hasher.update(amount.to_be_bytes());
    hasher.update(position.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Column positions resolved from a CSV header row
struct Columns {
    id: Option<usize>,
    date: usize,
    amount: usize,
    description: Option<usize>,
    top: Option<usize>,
    mid: Option<usize>,
    bottom: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim();
                names.iter().any(|name| h.eq_ignore_ascii_case(name))
            })
        };
        let require = |names: &[&str]| {
            find(names).ok_or_else(|| {
                Error::InvalidInput(format!("Missing required column: {}", names[0]))
            })
        };

        Ok(Self {
            id: find(&["id", "transaction_id"]),
            date: require(&["date", "transaction_date"])?,
            amount: require(&["amount"])?,
            description: find(&["description"]),
            top: find(&["category_top", "top_category"]),
            mid: find(&["category_mid", "mid_category"]),
            bottom: find(&["category_bottom", "bottom_category"]),
        })
    }

    fn row(&self, record: &StringRecord) -> Result<RawTransaction> {
        let cell = |col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let date = record
            .get(self.date)
            .ok_or_else(|| Error::InvalidInput(format!("Line {}: missing date", line)))?;
        let amount = record
            .get(self.amount)
            .ok_or_else(|| Error::InvalidInput(format!("Line {}: missing amount", line)))?;

        Ok(RawTransaction {
            id: Some(cell(self.id)).filter(|id| !id.is_empty()),
            date: date.to_string(),
            amount: RawAmount::Text(amount.to_string()),
            description: cell(self.description),
            category: Category::new(cell(self.top), cell(self.mid), cell(self.bottom)),
        })
    }
}

/// Parse a labeled transaction CSV
///
/// Required columns: `date`, `amount`. Optional: `id`, `description`,
/// `category_top`, `category_mid`, `category_bottom`. Header matching is
/// case-insensitive and column order is free.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (position, result) in rdr.records().enumerate() {
        let record = result?;
        let raw = columns.row(&record)?;
        transactions.push(raw.validate(position)?);
    }

    debug!("Parsed {} CSV transactions", transactions.len());
    Ok(transactions)
}

/// Parse an applicant JSON document
///
/// `applicant_id` overrides the id in the document; one of the two must be present.
pub fn parse_applicant_json<R: Read>(reader: R, applicant_id: Option<&str>) -> Result<Applicant> {
    let raw: RawApplicant = serde_json::from_reader(reader)?;

    let applicant_id = applicant_id
        .map(str::to_string)
        .or(raw.applicant_id)
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::InvalidInput("Missing applicant_id".into()))?;

    let transactions = raw
        .transactions
        .into_iter()
        .enumerate()
        .map(|(position, tx)| tx.validate(position))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        applicant = applicant_id.as_str(),
        "Parsed {} JSON transactions",
        transactions.len()
    );

    Ok(Applicant {
        applicant_id,
        transactions,
    })
}

/// Load an applicant from a `.csv` or `.json` file
///
/// CSV files carry no applicant id, so `applicant_id` is required for them.
pub fn load_applicant(path: &Path, applicant_id: Option<&str>) -> Result<Applicant> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => parse_applicant_json(File::open(path)?, applicant_id),
        "csv" => {
            let applicant_id = applicant_id
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| {
                    Error::InvalidInput("An applicant id is required for CSV input".into())
                })?;
            Ok(Applicant {
                applicant_id: applicant_id.to_string(),
                transactions: parse_csv(File::open(path)?)?,
            })
        }
        _ => Err(Error::UnsupportedFormat(path.display().to_string())),
    }
}

/// Parse a date string in the supported formats
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%y", // 01/15/24 (before %Y, which would read "24" as year 24)
        "%m/%d/%Y", // 01/15/2024
        "%m-%d-%Y", // 01-15-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    // Full timestamps keep their calendar day
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.date_naive());
    }

    Err(format!("Unable to parse date: {}", s))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Unable to parse amount: {}", s))
}
