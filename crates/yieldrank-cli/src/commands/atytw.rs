//! Atytw command implementation.
//!
//! Computes after-tax yield to worst for one bond and one investor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use yieldrank_core::types::{BondData, Date};
use yieldrank_tax::{AtytwCalculator, AtytwResult};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::input::{load_bond, load_profile};
use crate::output::{
    format_bps, format_rate, format_yield, print_bullets, print_csv, print_header, print_json,
    print_table, KeyValue,
};

/// Arguments for the atytw command.
#[derive(Args, Debug)]
pub struct AtytwArgs {
    /// Bond JSON file
    #[arg(short, long)]
    pub bond: PathBuf,

    /// Investor tax profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Also report the fully taxable yield needed at this rate (fraction, e.g. 0.37)
    #[arg(long)]
    pub taxable_rate: Option<f64>,
}

/// Serialized form of an after-tax computation.
#[derive(Debug, Serialize)]
pub struct AtytwReport {
    pub cusip: String,
    pub as_of: Date,
    #[serde(flatten)]
    pub result: AtytwResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_equivalent_yield: Option<f64>,
}

/// Execute the atytw command.
pub fn execute(args: AtytwArgs, ctx: &Context) -> Result<()> {
    let bond = load_bond(&args.bond)?;
    let profile = load_profile(&args.profile)?;

    let calculator = AtytwCalculator::new(ctx.as_of);
    let result = calculator.compute(&bond, &profile);
    let tey = args.taxable_rate.map(|rate| result.tax_equivalent_yield(rate));

    match ctx.format {
        OutputFormat::Json => print_json(&AtytwReport {
            cusip: bond.cusip.clone(),
            as_of: ctx.as_of,
            result,
            tax_equivalent_yield: tey,
        })?,
        OutputFormat::Csv => print_csv(&metrics(&bond, &result, tey))?,
        OutputFormat::Minimal => println!("{:.3}", result.atytw),
        OutputFormat::Table => {
            print_header(&format!("{} ({}) as of {}", bond.cusip, bond.bond_type, ctx.as_of));
            print_table(&metrics(&bond, &result, tey))?;
            print_header("Explanation");
            print_bullets(&result.explanation);
        }
    }

    Ok(())
}

fn metrics(bond: &BondData, result: &AtytwResult, tey: Option<f64>) -> Vec<KeyValue> {
    let breakdown = &result.tax_breakdown;
    let mut rows = vec![
        KeyValue::new("CUSIP", bond.cusip.clone()),
        KeyValue::new("Pre-tax YTW", format_yield(result.pre_tax_ytw)),
        KeyValue::new("Federal", format_rate(breakdown.federal)),
        KeyValue::new("State", format_rate(breakdown.state)),
        KeyValue::new("Local", format_rate(breakdown.local)),
        KeyValue::new("AMT", format_rate(breakdown.amt)),
        KeyValue::new("NIIT", format_rate(breakdown.niit)),
        KeyValue::new("Effective tax rate", format_rate(result.effective_tax_rate)),
    ];
    if let Some(bps) = result.oid_adjustment {
        rows.push(KeyValue::new("Discount adjustment", format_bps(bps)));
    }
    rows.push(KeyValue::new("After-tax YTW", format_yield(result.atytw)));
    rows.push(KeyValue::new("Tax drag", format_bps(result.tax_drag_bps())));
    if let Some(tey) = tey {
        rows.push(KeyValue::new("Tax-equivalent yield", format_yield(tey)));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldrank_core::types::{BondType, FilingStatus, TaxProfile};

    #[test]
    fn test_metrics_include_discount_only_when_present() {
        let as_of = Date::from_ymd(2025, 1, 2).unwrap();
        let profile = TaxProfile::new("VA", FilingStatus::Single, 0.24, 0.0575);
        let calc = AtytwCalculator::new(as_of);

        let par = BondData::new("P", BondType::Corporate, 5.0, 100.0, 5.0, as_of + 1826);
        let rows = metrics(&par, &calc.compute(&par, &profile), None);
        assert!(rows.iter().all(|r| r.key != "Discount adjustment"));

        let discount = BondData::new("D", BondType::Corporate, 5.0, 95.0, 4.0, as_of + 1826);
        let rows = metrics(&discount, &calc.compute(&discount, &profile), Some(0.37));
        assert!(rows.iter().any(|r| r.key == "Discount adjustment"));
        assert_eq!(rows.last().map(|r| r.key.as_str()), Some("Tax-equivalent yield"));
    }
}
