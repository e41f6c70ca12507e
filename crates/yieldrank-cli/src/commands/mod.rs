//! CLI command implementations.

pub mod atytw;
pub mod compare;
pub mod explain;
pub mod rank;
pub mod tables;

pub use atytw::AtytwArgs;
pub use compare::CompareArgs;
pub use explain::ExplainArgs;
pub use rank::RankArgs;
pub use tables::TablesArgs;

use yieldrank_core::types::{CreditRating, Date};
use yieldrank_ranking::RankingConfig;
use yieldrank_scoring::ScoreTables;

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Valuation date.
    pub as_of: Date,
    /// Score tables, with any overrides merged in.
    pub tables: ScoreTables,
    /// Whether large batches may be scored in parallel.
    pub parallel: bool,
}

impl Context {
    /// Resolves global flags.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let as_of = match cli.as_of.as_deref() {
            Some(s) => parse_date(s)?,
            None => Date::today(),
        };
        let tables = match &cli.tables {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading score table overrides");
                ScoreTables::from_file(path)?
            }
            None => ScoreTables::standard().clone(),
        };
        Ok(Self {
            format: cli.format,
            as_of,
            tables,
            parallel: cli.parallel,
        })
    }

    /// Ranking configuration for this run.
    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig::sequential()
            .with_parallel(self.parallel)
            .with_as_of(self.as_of)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a rating in S&P or Moody's notation.
pub fn parse_rating(s: &str) -> CliResult<CreditRating> {
    CreditRating::parse(s).ok_or_else(|| CliError::InvalidRating(s.to_string()))
}
