//! CLI argument definitions using clap
//!
//! `evaluate` and `income` both take a transaction file and an optional
//! applicant id; rendering choices are plain strings parsed in `main`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Offer - Evaluate applicants for a product offer from their income history
#[derive(Parser)]
#[command(name = "offer")]
#[command(about = "Income-based offer eligibility and product recommendation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an applicant and print the offer
    Evaluate {
        /// Transaction file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Applicant id (required for CSV, overrides the id in JSON)
        #[arg(short, long)]
        applicant: Option<String>,

        /// Decision timestamp (RFC 3339 or YYYY-MM-DD); defaults to now
        ///
        /// Pinning the timestamp makes repeated runs produce identical output.
        #[arg(long)]
        as_of: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Show the value each rule observed
        #[arg(long)]
        explain: bool,
    },

    /// Show monthly income and trailing-window statistics
    Income {
        /// Transaction file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Applicant id (required for CSV, overrides the id in JSON)
        #[arg(short, long)]
        applicant: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },
}
