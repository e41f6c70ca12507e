//! Explain command implementation.
//!
//! Runs the ranking pipeline and prints the reasoning behind each rank.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use yieldrank_ranking::{Explanation, ExplanationBuilder, RankedBond};

use crate::cli::OutputFormat;
use crate::commands::rank::{run_pipeline, ScreenArgs};
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{print_bullets, print_csv, print_header, print_json};

/// Arguments for the explain command.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// JSON array of candidate bonds
    #[arg(short, long)]
    pub candidates: PathBuf,

    /// Investor tax profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Explain only this bond, ranked or not
    #[arg(long)]
    pub cusip: Option<String>,

    /// Include the factors behind each score
    #[arg(long)]
    pub factors: bool,

    #[command(flatten)]
    pub screen: ScreenArgs,
}

/// Explanation of one bond.
#[derive(Debug, Serialize)]
pub struct BondExplanation {
    pub cusip: String,
    #[serde(flatten)]
    pub explanation: Explanation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calculation: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stability_factors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub liquidity_factors: Vec<String>,
}

/// Flattened explanation for CSV.
#[derive(Debug, Serialize)]
pub struct ExplanationRow {
    pub cusip: String,
    pub summary: String,
    pub bullets: String,
}

impl BondExplanation {
    fn new(bond: &RankedBond, with_factors: bool) -> Self {
        let explanation = ExplanationBuilder::new().explain(bond);
        let detail = |lines: &Vec<String>| {
            if with_factors {
                lines.clone()
            } else {
                Vec::new()
            }
        };
        Self {
            cusip: bond.bond.cusip.clone(),
            explanation,
            calculation: detail(&bond.explanation),
            stability_factors: detail(&bond.stability_factors),
            liquidity_factors: detail(&bond.liquidity_factors),
        }
    }

    fn to_row(&self) -> ExplanationRow {
        ExplanationRow {
            cusip: self.cusip.clone(),
            summary: self.explanation.summary.clone(),
            bullets: self.explanation.bullets.join("; "),
        }
    }
}

/// Execute the explain command.
pub fn execute(args: ExplainArgs, ctx: &Context) -> Result<()> {
    let run = run_pipeline(&args.candidates, &args.profile, &args.screen, ctx)?;

    let selected = match args.cusip.as_deref() {
        Some(cusip) => vec![find(cusip, &run.ranked, &run.scored)?],
        None => run.ranked.iter().collect(),
    };
    let explanations: Vec<BondExplanation> = selected
        .into_iter()
        .map(|bond| BondExplanation::new(bond, args.factors))
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&explanations)?,
        OutputFormat::Csv => {
            let rows: Vec<ExplanationRow> = explanations.iter().map(BondExplanation::to_row).collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for e in &explanations {
                println!("{}", e.explanation.summary);
            }
        }
        OutputFormat::Table => {
            for e in &explanations {
                print_header(&e.explanation.summary);
                print_bullets(&e.explanation.bullets);
                print_section("Calculation", &e.calculation);
                print_section("Stability factors", &e.stability_factors);
                print_section("Liquidity factors", &e.liquidity_factors);
            }
        }
    }

    Ok(())
}

/// Prefers the ranked copy so the summary carries its rank.
fn find<'a>(cusip: &str, ranked: &'a [RankedBond], scored: &'a [RankedBond]) -> CliResult<&'a RankedBond> {
    ranked
        .iter()
        .chain(scored)
        .find(|bond| bond.bond.cusip.eq_ignore_ascii_case(cusip))
        .ok_or_else(|| CliError::UnknownCusip(cusip.to_string()))
}

fn print_section(title: &str, lines: &[String]) {
    if !lines.is_empty() {
        println!("  {title}:");
        print_bullets(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldrank_core::types::{BondData, BondType, CreditProfile, Date, Issuer, IssuerType};

    fn bond(cusip: &str, rank: Option<u32>) -> RankedBond {
        let as_of = Date::from_ymd(2025, 1, 2).unwrap();
        RankedBond {
            bond: BondData::new(cusip, BondType::Corporate, 5.0, 100.0, 5.0, as_of + 1826),
            issuer: Issuer::new("Acme", IssuerType::Corporation),
            credit: CreditProfile::default(),
            market: None,
            atytw: 3.8,
            pre_tax_ytw: 5.0,
            stability_score: 0.5,
            liquidity_score: 0.5,
            rank,
            explanation: vec!["Corporate: Fully taxable (federal, state, local)".to_string()],
            stability_factors: Vec::new(),
            liquidity_factors: Vec::new(),
        }
    }

    #[test]
    fn test_find_prefers_ranked_copy() {
        let ranked = vec![bond("A", Some(1))];
        let scored = vec![bond("A", None), bond("B", None)];

        assert_eq!(find("a", &ranked, &scored).unwrap().rank, Some(1));
        assert_eq!(find("B", &ranked, &scored).unwrap().rank, None);
        assert!(matches!(find("C", &ranked, &scored), Err(CliError::UnknownCusip(_))));
    }

    #[test]
    fn test_factors_only_when_requested() {
        let b = bond("A", Some(1));
        assert!(BondExplanation::new(&b, false).calculation.is_empty());
        let full = BondExplanation::new(&b, true);
        assert_eq!(full.calculation.len(), 1);
        assert!(full.explanation.summary.starts_with("Rank #1: Acme"));
        assert!(full.to_row().bullets.contains("After-tax yield 3.80%"));
    }
}
