//! Tally CLI - Receipt-based expense aggregator
//!
//! Usage:
//!   tally seed                    Generate demo receipts
//!   tally add                     Process a receipt upload (simulated)
//!   tally report summary          Monthly summary with budget alerts
//!   tally export -o receipts.csv  Export as CSV

mod cli;
mod commands;

#[cfg(test)]
mod tests;

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
        .with(fmt::layer().with_target(false).compact())
        .init();

    let data_path = commands::resolve_data_path(cli.data);

    match cli.command {
        Commands::Seed { count } => commands::cmd_seed(&data_path, count),
        Commands::Add => commands::cmd_add(&data_path),
        Commands::List { limit } => commands::cmd_list(&data_path, limit),
        Commands::Report { report_type } => match report_type {
            ReportType::Summary { month, budget } => {
                let month = month.unwrap_or_else(commands::current_month);
                commands::cmd_report_summary(&data_path, &month, budget)
            }
            ReportType::Categories => commands::cmd_report_categories(&data_path),
            ReportType::Daily => commands::cmd_report_daily(&data_path),
            ReportType::Stores { limit } => commands::cmd_report_stores(&data_path, limit),
            ReportType::Trend => commands::cmd_report_trend(&data_path),
        },
        Commands::Export { output } => commands::cmd_export(&data_path, output.as_deref()),
        Commands::Status => commands::cmd_status(&data_path),
    }
}
