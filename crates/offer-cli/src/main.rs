//! Offer CLI - income-based offer evaluation
//!
//! Usage:
//!   offer evaluate --file history.csv --applicant A-100   Evaluate and print the offer
//!   offer evaluate --file applicant.json --format json     Machine-readable output
//!   offer income --file applicant.json                     Monthly income breakdown

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Evaluate {
            file,
            applicant,
            as_of,
            format,
            explain,
        } => {
            let format: commands::OutputFormat = format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            commands::cmd_evaluate(
                &file,
                applicant.as_deref(),
                as_of.as_deref(),
                format,
                explain,
            )
        }
        Commands::Income {
            file,
            applicant,
            format,
        } => {
            let format: commands::OutputFormat = format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            commands::cmd_income(&file, applicant.as_deref(), format)
        }
    }
}
