//! Rank command implementation.
//!
//! Scores every candidate, applies the investor's screening limits and
//! prints the ranked list.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use yieldrank_ranking::{score_candidates, RankedBond, RankingEngine, ScreeningCriteria};

use crate::cli::OutputFormat;
use crate::commands::{parse_rating, Context};
use crate::error::CliResult;
use crate::input::{load_candidates, load_profile};
use crate::output::{format_yield, print_csv, print_header, print_info, print_json, print_table};

/// Screening limits shared by `rank` and `explain`.
#[derive(Args, Debug, Default)]
pub struct ScreenArgs {
    /// Longest acceptable duration in years
    #[arg(long)]
    pub max_duration: Option<f64>,

    /// Weakest acceptable rating (e.g. A-, Baa1)
    #[arg(long)]
    pub rating_floor: Option<String>,

    /// Lowest acceptable price per 100 par
    #[arg(long)]
    pub price_floor: Option<f64>,
}

impl ScreenArgs {
    /// Builds screening criteria from the flags.
    pub fn criteria(&self) -> CliResult<ScreeningCriteria> {
        let mut criteria = ScreeningCriteria::new();
        if let Some(floor) = self.rating_floor.as_deref() {
            criteria = criteria.with_rating_floor(parse_rating(floor)?);
        }
        if let Some(years) = self.max_duration {
            criteria = criteria.with_max_duration(years);
        }
        if let Some(price) = self.price_floor {
            criteria = criteria.with_price_floor(price);
        }
        Ok(criteria)
    }
}

/// Arguments for the rank command.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// JSON array of candidate bonds
    #[arg(short, long)]
    pub candidates: PathBuf,

    /// Investor tax profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    #[command(flatten)]
    pub screen: ScreenArgs,

    /// Only show the best N bonds
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// One ranked bond, for tables and CSV.
#[derive(Debug, Serialize, Tabled)]
pub struct RankRow {
    #[tabled(rename = "#")]
    pub rank: u32,
    #[tabled(rename = "CUSIP")]
    pub cusip: String,
    #[tabled(rename = "Issuer")]
    pub issuer: String,
    #[tabled(rename = "Type")]
    pub bond_type: String,
    #[tabled(rename = "Rating")]
    pub rating: String,
    #[tabled(rename = "YTW")]
    pub pre_tax_ytw: String,
    #[tabled(rename = "ATYTW")]
    pub atytw: String,
    #[tabled(rename = "Stability")]
    pub stability: String,
    #[tabled(rename = "Liquidity")]
    pub liquidity: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

impl From<&RankedBond> for RankRow {
    fn from(bond: &RankedBond) -> Self {
        Self {
            rank: bond.rank.unwrap_or_default(),
            cusip: bond.bond.cusip.clone(),
            issuer: bond.issuer.name.clone(),
            bond_type: bond.bond.bond_type.to_string(),
            rating: bond
                .credit
                .rating
                .map_or_else(|| "NR".to_string(), |r| r.to_string()),
            pre_tax_ytw: format_yield(bond.pre_tax_ytw),
            atytw: format_yield(bond.atytw),
            stability: format!("{:.2}", bond.stability_score),
            liquidity: format!("{:.2}", bond.liquidity_score),
            duration: bond
                .duration()
                .map_or_else(|| "-".to_string(), |d| format!("{d:.2}")),
        }
    }
}

/// Candidates scored and ranked by one pipeline run.
pub struct RankingRun {
    /// Every candidate, scored but unranked, in input order.
    pub scored: Vec<RankedBond>,
    /// Survivors of screening, in rank order.
    pub ranked: Vec<RankedBond>,
}

/// Loads inputs and runs score, screen and rank.
pub fn run_pipeline(
    candidates: &std::path::Path,
    profile: &std::path::Path,
    screen: &ScreenArgs,
    ctx: &Context,
) -> CliResult<RankingRun> {
    let inputs = load_candidates(candidates)?;
    let profile = load_profile(profile)?;
    let criteria = screen.criteria()?;

    let scored = score_candidates(&inputs, &profile, &ctx.ranking_config(), &ctx.tables);
    let ranked = RankingEngine::new().rank_screened(scored.clone(), &criteria);
    tracing::info!(
        candidates = scored.len(),
        ranked = ranked.len(),
        "ranking complete"
    );

    Ok(RankingRun { scored, ranked })
}

/// Execute the rank command.
pub fn execute(args: RankArgs, ctx: &Context) -> Result<()> {
    let run = run_pipeline(&args.candidates, &args.profile, &args.screen, ctx)?;
    let screened_out = run.scored.len() - run.ranked.len();

    let mut ranked = run.ranked;
    if let Some(top) = args.top {
        ranked.truncate(top);
    }

    match ctx.format {
        OutputFormat::Json => print_json(&ranked)?,
        OutputFormat::Csv => print_csv(&rows(&ranked))?,
        OutputFormat::Minimal => {
            for bond in &ranked {
                println!(
                    "{} {} {:.3}",
                    bond.rank.unwrap_or_default(),
                    bond.bond.cusip,
                    bond.atytw
                );
            }
        }
        OutputFormat::Table => {
            print_header(&format!("Ranked by after-tax yield as of {}", ctx.as_of));
            print_table(&rows(&ranked))?;
            if screened_out > 0 {
                print_info(&format!(
                    "{screened_out} of {} candidates screened out",
                    run.scored.len()
                ));
            }
        }
    }

    Ok(())
}

fn rows(ranked: &[RankedBond]) -> Vec<RankRow> {
    ranked.iter().map(RankRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldrank_core::types::CreditRating;

    #[test]
    fn test_screen_args_build_criteria() {
        let args = ScreenArgs {
            max_duration: Some(7.0),
            rating_floor: Some("Aa3".to_string()),
            price_floor: None,
        };
        let criteria = args.criteria().unwrap();
        assert_eq!(criteria.rating_floor, Some(CreditRating::AAMinus));
        assert_eq!(criteria.max_duration, Some(7.0));
        assert!(criteria.price_floor.is_none());
    }

    #[test]
    fn test_screen_args_reject_bad_rating() {
        let args = ScreenArgs {
            rating_floor: Some("excellent".to_string()),
            ..ScreenArgs::default()
        };
        assert!(args.criteria().is_err());
    }
}
