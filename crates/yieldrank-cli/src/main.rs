//! Yieldrank CLI - rank bonds by after-tax yield to worst.
//!
//! # Usage
//!
//! ```bash
//! # After-tax yield of one bond
//! yieldrank atytw --bond bond.json --profile investor.json
//!
//! # Compare two bonds for the same investor
//! yieldrank compare --left muni.json --right corp.json --profile investor.json
//!
//! # Rank a candidate list under screening limits
//! yieldrank rank --candidates bonds.json --profile investor.json --rating-floor A --max-duration 7
//!
//! # Explain why each bond landed where it did
//! yieldrank explain --candidates bonds.json --profile investor.json --cusip 13063DAA6
//!
//! # Print the effective score tables
//! yieldrank --tables overrides.toml tables show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::from_cli(&cli)?;
    tracing::debug!(as_of = %ctx.as_of, format = ?ctx.format, "starting");

    match cli.command {
        Commands::Atytw(args) => commands::atytw::execute(args, &ctx)?,
        Commands::Compare(args) => commands::compare::execute(args, &ctx)?,
        Commands::Rank(args) => commands::rank::execute(args, &ctx)?,
        Commands::Explain(args) => commands::explain::execute(args, &ctx)?,
        Commands::Tables(args) => commands::tables::execute(args, &ctx)?,
    }

    Ok(())
}
