//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track receipts and see where the money goes
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Receipt-based expense aggregator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the receipt data file (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the demo dataset
    Seed {
        /// Number of receipts to generate
        #[arg(short, long, default_value = "40")]
        count: usize,
    },

    /// Process a receipt upload (simulated)
    Add,

    /// List receipts, newest first
    List {
        /// Maximum number of receipts to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Spending reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Export receipts as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show data file status
    Status,
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Monthly summary with budget alerts
    Summary {
        /// Month to summarize (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Monthly budget limit in dollars
        #[arg(short, long, default_value = "1000")]
        budget: f64,
    },

    /// Spending by category
    Categories,

    /// Spending by day
    Daily,

    /// Highest-spend stores
    Stores {
        /// Number of stores to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Month-over-month spending trend
    Trend,
}
