//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AtytwArgs, CompareArgs, ExplainArgs, RankArgs, TablesArgs};

/// Yieldrank - after-tax bond ranking for individual investors
#[derive(Parser)]
#[command(name = "yieldrank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Valuation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true, env = "YIELDRANK_AS_OF")]
    pub as_of: Option<String>,

    /// TOML file overriding the built-in score tables
    #[arg(long, global = true, env = "YIELDRANK_TABLES")]
    pub tables: Option<PathBuf>,

    /// Score candidates in parallel for large batches
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// After-tax yield to worst for a single bond
    Atytw(AtytwArgs),

    /// Compare two bonds after tax for the same investor
    Compare(CompareArgs),

    /// Score, screen and rank a list of candidate bonds
    Rank(RankArgs),

    /// Explain the ranking of each candidate
    Explain(ExplainArgs),

    /// Show or validate score tables
    Tables(TablesArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
