//! Compare command implementation.
//!
//! Puts two bonds side by side after tax for the same investor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use yieldrank_tax::{AtytwCalculator, AtytwResult, BondComparison, Preference};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::input::{load_bond, load_profile};
use crate::output::{
    format_bps, format_rate, format_yield, print_csv, print_header, print_info, print_json,
    print_table,
};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First bond JSON file
    #[arg(short, long)]
    pub left: PathBuf,

    /// Second bond JSON file
    #[arg(short, long)]
    pub right: PathBuf,

    /// Investor tax profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,
}

/// One side of a comparison, for tables and CSV.
#[derive(Debug, Serialize, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "CUSIP")]
    pub cusip: String,
    #[tabled(rename = "Pre-tax YTW")]
    pub pre_tax_ytw: String,
    #[tabled(rename = "Tax Rate")]
    pub effective_tax_rate: String,
    #[tabled(rename = "After-tax YTW")]
    pub atytw: String,
}

impl ComparisonRow {
    fn new(cusip: &str, result: &AtytwResult) -> Self {
        Self {
            cusip: cusip.to_string(),
            pre_tax_ytw: format_yield(result.pre_tax_ytw),
            effective_tax_rate: format_rate(result.effective_tax_rate),
            atytw: format_yield(result.atytw),
        }
    }
}

/// Serialized form of a comparison.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub left_cusip: String,
    pub right_cusip: String,
    #[serde(flatten)]
    pub comparison: BondComparison,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, ctx: &Context) -> Result<()> {
    let left = load_bond(&args.left)?;
    let right = load_bond(&args.right)?;
    let profile = load_profile(&args.profile)?;

    let comparison = AtytwCalculator::new(ctx.as_of).compare(&left, &right, &profile);
    let verdict = verdict(&left.cusip, &right.cusip, &comparison);

    match ctx.format {
        OutputFormat::Json => print_json(&ComparisonReport {
            left_cusip: left.cusip,
            right_cusip: right.cusip,
            comparison,
        })?,
        OutputFormat::Csv => print_csv(&[
            ComparisonRow::new(&left.cusip, &comparison.left),
            ComparisonRow::new(&right.cusip, &comparison.right),
        ])?,
        OutputFormat::Minimal => println!("{:.1}", comparison.advantage_bps),
        OutputFormat::Table => {
            print_header(&format!("After-tax comparison as of {}", ctx.as_of));
            print_table(&[
                ComparisonRow::new(&left.cusip, &comparison.left),
                ComparisonRow::new(&right.cusip, &comparison.right),
            ])?;
            print_info(&verdict);
        }
    }

    Ok(())
}

fn verdict(left: &str, right: &str, comparison: &BondComparison) -> String {
    match comparison.preferred {
        Preference::Left => format!(
            "{left} yields {} more after tax",
            format_bps(comparison.advantage_bps)
        ),
        Preference::Right => format!(
            "{right} yields {} more after tax",
            format_bps(-comparison.advantage_bps)
        ),
        Preference::Equivalent => format!("{left} and {right} are equivalent after tax"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldrank_core::types::{BondData, BondType, Date, FilingStatus, TaxProfile};

    #[test]
    fn test_verdict_names_winner() {
        let as_of = Date::from_ymd(2025, 1, 2).unwrap();
        let profile = TaxProfile::new("TX", FilingStatus::Single, 0.24, 0.0);
        let calc = AtytwCalculator::new(as_of);
        let low = BondData::new("LOW", BondType::Corporate, 4.0, 100.0, 4.0, as_of + 1826);
        let high = BondData::new("HIGH", BondType::Corporate, 5.0, 100.0, 5.0, as_of + 1826);

        let cmp = calc.compare(&low, &high, &profile);
        assert_eq!(verdict("LOW", "HIGH", &cmp), "HIGH yields 76.0 bps more after tax");

        let cmp = calc.compare(&low, &low, &profile);
        assert!(verdict("LOW", "LOW", &cmp).contains("equivalent"));
    }
}
