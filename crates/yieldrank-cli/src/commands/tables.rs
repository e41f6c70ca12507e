//! Tables command implementation.
//!
//! Shows, exports and validates the sector, state and rating score tables.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;
use yieldrank_scoring::ScoreTables;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_csv, print_header, print_json, print_success, print_table};

/// Arguments for the tables command.
#[derive(Args, Debug)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub command: TablesCommand,
}

/// Tables subcommands.
#[derive(Subcommand, Debug)]
pub enum TablesCommand {
    /// Show the effective tables (built-in plus any --tables overrides)
    Show(ShowArgs),

    /// Print the effective tables as TOML, ready to edit as an override file
    Export,

    /// Check an override file without running anything
    Validate(ValidateArgs),
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Limit output to one table
    #[arg(short, long, value_enum)]
    pub table: Option<TableKind>,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// TOML override file
    pub file: PathBuf,
}

/// The individual score tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// Issuer sector scores
    Sectors,
    /// State scores
    States,
    /// Rating scores
    Ratings,
}

/// One table entry.
#[derive(Debug, Serialize, Tabled)]
pub struct TableEntry {
    #[tabled(rename = "Table")]
    pub table: &'static str,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Score")]
    pub score: f64,
}

/// Execute the tables command.
pub fn execute(args: TablesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        TablesCommand::Show(show) => {
            let entries = entries(&ctx.tables, show.table);
            match ctx.format {
                OutputFormat::Json => print_json(&entries)?,
                OutputFormat::Csv => print_csv(&entries)?,
                OutputFormat::Minimal => {
                    for e in &entries {
                        println!("{} {}", e.key, e.score);
                    }
                }
                OutputFormat::Table => {
                    print_header("Score tables");
                    print_table(&entries)?;
                }
            }
        }
        TablesCommand::Export => {
            print!("{}", ctx.tables.to_toml_string().map_err(CliError::from)?);
        }
        TablesCommand::Validate(validate) => {
            let tables = ScoreTables::from_file(&validate.file).map_err(CliError::from)?;
            print_success(&format!(
                "{} is valid ({} sectors, {} states, {} ratings)",
                validate.file.display(),
                tables.sectors.len(),
                tables.states.len(),
                tables.ratings.len()
            ));
        }
    }
    Ok(())
}

fn entries(tables: &ScoreTables, only: Option<TableKind>) -> Vec<TableEntry> {
    let wanted = |kind: TableKind| only.map_or(true, |o| o == kind);
    let mut out = Vec::new();

    let sections = [
        (TableKind::Sectors, "sectors", &tables.sectors, tables.unknown_sector),
        (TableKind::States, "states", &tables.states, tables.unknown_state),
        (TableKind::Ratings, "ratings", &tables.ratings, tables.unknown_rating),
    ];
    for (kind, name, table, unknown) in sections {
        if !wanted(kind) {
            continue;
        }
        out.extend(table.iter().map(|(key, &score)| TableEntry {
            table: name,
            key: key.clone(),
            score,
        }));
        out.push(TableEntry {
            table: name,
            key: "(unknown)".to_string(),
            score: unknown,
        });
    }
    out
}
