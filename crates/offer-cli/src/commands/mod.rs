//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `evaluate` - Offer evaluation (text or JSON, optional rule explanation)
//! - `income` - Monthly income breakdown and window statistics

pub mod evaluate;
pub mod income;

// Re-export command functions for main.rs
pub use evaluate::*;
pub use income::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use offer_core::{import::load_applicant, Applicant};

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Available: text, json", s)),
        }
    }
}

/// Load an applicant file, attaching the path to any error
pub fn open_applicant(file: &Path, applicant: Option<&str>) -> Result<Applicant> {
    load_applicant(file, applicant)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))
}

/// Resolve `--as-of` to a decision timestamp (now if absent)
///
/// Accepts RFC 3339, or a bare date meaning midnight UTC.
pub fn resolve_decided_at(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    let Some(s) = as_of else {
        return Ok(Utc::now());
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .context("Invalid --as-of timestamp (use RFC 3339 or YYYY-MM-DD)")?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
