//! Lookup tables behind stability scoring.
//!
//! The standard tables are built once per process and shared. Callers that
//! need different numbers load a TOML override file whose entries are
//! merged over the standard tables:
//!
//! ```toml
//! unknown_state = 0.65
//!
//! [sectors]
//! "Water & Sewer" = 0.97
//!
//! [states]
//! IL = 0.60
//!
//! [ratings]
//! "Aa2" = 0.91
//! ```
//!
//! Keys are normalized on load: sectors to lower-case kebab form, states to
//! upper-case postal codes, ratings to S&P notation.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use yieldrank_core::types::CreditRating;

use crate::error::{ScoringError, ScoringResult};

/// Score for a sector missing from the table.
pub const UNKNOWN_SECTOR_SCORE: f64 = 0.5;

/// Score for a state missing from the table.
pub const UNKNOWN_STATE_SCORE: f64 = 0.7;

/// Score for a rating missing from the table.
pub const UNKNOWN_RATING_SCORE: f64 = 0.6;

const STANDARD_SECTORS: [(&str, f64); 16] = [
    ("water-sewer", 0.95),
    ("general-obligation", 0.90),
    ("essential-service", 0.90),
    ("public-power", 0.88),
    ("school-district", 0.88),
    ("electric", 0.85),
    ("education", 0.85),
    ("transportation", 0.80),
    ("toll-road", 0.75),
    ("airport", 0.75),
    ("higher-education", 0.75),
    ("housing", 0.70),
    ("healthcare", 0.65),
    ("hospital", 0.65),
    ("special-tax", 0.60),
    ("industrial-development", 0.40),
];

const STANDARD_STATES: [(&str, f64); 16] = [
    ("TX", 0.90),
    ("CA", 0.80),
    ("NY", 0.80),
    ("VA", 0.95),
    ("MD", 0.95),
    ("DE", 0.95),
    ("UT", 0.95),
    ("GA", 0.92),
    ("NC", 0.95),
    ("FL", 0.88),
    ("WA", 0.88),
    ("MA", 0.85),
    ("PA", 0.75),
    ("NJ", 0.65),
    ("IL", 0.55),
    ("CT", 0.70),
];

const STANDARD_RATINGS: [(CreditRating, f64); 10] = [
    (CreditRating::AAA, 1.00),
    (CreditRating::AAPlus, 0.95),
    (CreditRating::AA, 0.90),
    (CreditRating::AAMinus, 0.85),
    (CreditRating::APlus, 0.80),
    (CreditRating::A, 0.75),
    (CreditRating::AMinus, 0.70),
    (CreditRating::BBBPlus, 0.65),
    (CreditRating::BBB, 0.60),
    (CreditRating::BBBMinus, 0.55),
];

static STANDARD_TABLES: Lazy<ScoreTables> = Lazy::new(|| ScoreTables {
    unknown_sector: UNKNOWN_SECTOR_SCORE,
    unknown_state: UNKNOWN_STATE_SCORE,
    unknown_rating: UNKNOWN_RATING_SCORE,
    sectors: STANDARD_SECTORS
        .iter()
        .map(|(k, v)| ((*k).to_string(), *v))
        .collect(),
    states: STANDARD_STATES
        .iter()
        .map(|(k, v)| ((*k).to_string(), *v))
        .collect(),
    ratings: STANDARD_RATINGS
        .iter()
        .map(|(r, v)| (r.sp_notation().to_string(), *v))
        .collect(),
});

/// Sector, state and rating scores used by the stability scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTables {
    /// Fallback for unrecognized sectors.
    pub unknown_sector: f64,
    /// Fallback for unrecognized states.
    pub unknown_state: f64,
    /// Fallback for ratings outside the table.
    pub unknown_rating: f64,
    /// Sector scores keyed by normalized sector.
    pub sectors: BTreeMap<String, f64>,
    /// State scores keyed by postal code.
    pub states: BTreeMap<String, f64>,
    /// Rating scores keyed by S&P notation.
    pub ratings: BTreeMap<String, f64>,
}

/// Partial tables as they appear in an override file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableOverrides {
    #[serde(default)]
    sectors: BTreeMap<String, f64>,
    #[serde(default)]
    states: BTreeMap<String, f64>,
    #[serde(default)]
    ratings: BTreeMap<String, f64>,
    unknown_sector: Option<f64>,
    unknown_state: Option<f64>,
    unknown_rating: Option<f64>,
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl ScoreTables {
    /// The built-in tables.
    #[must_use]
    pub fn standard() -> &'static ScoreTables {
        &STANDARD_TABLES
    }

    /// Parses TOML overrides and merges them over the standard tables.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Parse` for malformed TOML and
    /// `ScoringError::InvalidTable` for out-of-range scores or rating keys
    /// that do not parse.
    pub fn from_toml_str(source: &str) -> ScoringResult<Self> {
        let overrides: TableOverrides = toml::from_str(source)?;
        let mut tables = Self::standard().clone();
        tables.apply(overrides)?;
        tables.validate()?;
        log::debug!(
            "score tables: {} sectors, {} states, {} ratings",
            tables.sectors.len(),
            tables.states.len(),
            tables.ratings.len()
        );
        Ok(tables)
    }

    /// Loads TOML overrides from a file.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Parse` if the file cannot be read, otherwise
    /// as [`ScoreTables::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the tables to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Parse` if serialization fails.
    pub fn to_toml_string(&self) -> ScoringResult<String> {
        toml::to_string_pretty(self).map_err(|e| ScoringError::parse(e.to_string()))
    }

    fn apply(&mut self, overrides: TableOverrides) -> ScoringResult<()> {
        for (key, score) in overrides.sectors {
            self.sectors.insert(normalize_sector(&key), score);
        }
        for (key, score) in overrides.states {
            self.states.insert(normalize_state(&key), score);
        }
        for (key, score) in overrides.ratings {
            let rating = CreditRating::parse(&key).ok_or_else(|| {
                ScoringError::invalid_table("ratings", &key, "unrecognized rating")
            })?;
            self.ratings.insert(rating.sp_notation().to_string(), score);
        }
        if let Some(score) = overrides.unknown_sector {
            self.unknown_sector = score;
        }
        if let Some(score) = overrides.unknown_state {
            self.unknown_state = score;
        }
        if let Some(score) = overrides.unknown_rating {
            self.unknown_rating = score;
        }
        Ok(())
    }

    /// Checks every score is a finite value in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::InvalidTable` naming the first bad entry.
    pub fn validate(&self) -> ScoringResult<()> {
        let tables = [
            ("sectors", &self.sectors),
            ("states", &self.states),
            ("ratings", &self.ratings),
        ];
        for (name, table) in tables {
            for (key, &score) in table {
                check_score(name, key, score)?;
            }
        }
        check_score("defaults", "unknown_sector", self.unknown_sector)?;
        check_score("defaults", "unknown_state", self.unknown_state)?;
        check_score("defaults", "unknown_rating", self.unknown_rating)?;
        Ok(())
    }

    /// Score for a sector, if the table knows it.
    #[must_use]
    pub fn sector_score(&self, sector: &str) -> Option<f64> {
        self.sectors.get(&normalize_sector(sector)).copied()
    }

    /// Score for a state, if the table knows it.
    #[must_use]
    pub fn state_score(&self, state: &str) -> Option<f64> {
        self.states.get(&normalize_state(state)).copied()
    }

    /// Score for a rating, if the table knows it.
    #[must_use]
    pub fn rating_score(&self, rating: CreditRating) -> Option<f64> {
        self.ratings.get(rating.sp_notation()).copied()
    }
}

fn check_score(table: &str, key: &str, score: f64) -> ScoringResult<()> {
    if score.is_finite() && (0.0..=1.0).contains(&score) {
        Ok(())
    } else {
        Err(ScoringError::invalid_table(
            table,
            key,
            format!("score {score} outside [0, 1]"),
        ))
    }
}

/// Normalizes a sector name to lower-case kebab form.
///
/// `"Water & Sewer"`, `"water and sewer"` and `"WATER_SEWER"` all become
/// `"water-sewer"`.
#[must_use]
pub fn normalize_sector(sector: &str) -> String {
    sector
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .filter(|word| word != "and")
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalizes a state to its upper-case postal code.
#[must_use]
pub fn normalize_state(state: &str) -> String {
    state.trim().to_ascii_uppercase()
}
