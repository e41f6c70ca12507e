//! Credit and structural stability scoring.
//!
//! Starting from a neutral 0.5:
//!
//! 1. General-obligation issuers (municipality, county) add 0.15. Other
//!    issuers with a sector blend toward the sector score: `0.3 * s + 0.7 * sector`.
//! 2. A known state blends in at 20%: `0.8 * s + 0.2 * state`.
//! 3. A rating blends in at 40%: `0.6 * s + 0.4 * rating`.
//! 4. Insurance adds 0.05; an underlying rating scoring above 0.7 adds 0.03.
//!
//! The result is clamped to `[0, 1]`.

use yieldrank_core::types::{CreditProfile, CreditRating, Issuer};

use crate::score::{StabilityScore, NEUTRAL_SCORE};
use crate::tables::{normalize_sector, normalize_state, ScoreTables};

/// Bonus for general-obligation issuers.
pub const GENERAL_OBLIGATION_BONUS: f64 = 0.15;

/// Weight kept on the running score when blending in a sector.
pub const SECTOR_BLEND: f64 = 0.3;

/// Weight kept on the running score when blending in a state.
pub const STATE_BLEND: f64 = 0.8;

/// Weight kept on the running score when blending in a rating.
pub const RATING_BLEND: f64 = 0.6;

/// Bonus for bond insurance.
pub const INSURED_BONUS: f64 = 0.05;

/// Bonus for a strong underlying rating.
pub const UNDERLYING_BONUS: f64 = 0.03;

/// Underlying rating score that must be exceeded for the bonus.
pub const UNDERLYING_THRESHOLD: f64 = 0.7;

/// Scores issuer and credit stability from lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct StabilityScorer<'t> {
    tables: &'t ScoreTables,
}

impl Default for StabilityScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityScorer<'static> {
    /// Creates a scorer over the standard tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: ScoreTables::standard(),
        }
    }
}

impl<'t> StabilityScorer<'t> {
    /// Creates a scorer over custom tables.
    #[must_use]
    pub fn with_tables(tables: &'t ScoreTables) -> Self {
        Self { tables }
    }

    /// The tables in use.
    #[must_use]
    pub fn tables(&self) -> &'t ScoreTables {
        self.tables
    }

    /// Scores `issuer` with its credit profile.
    #[must_use]
    pub fn score(&self, issuer: &Issuer, credit: &CreditProfile) -> StabilityScore {
        let tables = self.tables;
        let mut score = NEUTRAL_SCORE;
        let mut factors = Vec::new();

        if issuer.issuer_type.is_general_obligation() {
            score += GENERAL_OBLIGATION_BONUS;
            factors.push(format!(
                "General obligation issuer ({}): +{GENERAL_OBLIGATION_BONUS:.2}",
                issuer.issuer_type
            ));
        } else if let Some(sector) = issuer.sector.as_deref() {
            let key = normalize_sector(sector);
            let sector_score = match tables.sector_score(&key) {
                Some(s) => {
                    factors.push(format!("Sector {key}: {s:.2}"));
                    s
                }
                None => {
                    factors.push(format!(
                        "Sector {key}: unrecognized, using {:.2}",
                        tables.unknown_sector
                    ));
                    tables.unknown_sector
                }
            };
            score = score * SECTOR_BLEND + sector_score * (1.0 - SECTOR_BLEND);
        }

        if let Some(state) = issuer.state.as_deref() {
            let key = normalize_state(state);
            let state_score = tables.state_score(&key).unwrap_or(tables.unknown_state);
            factors.push(format!("State {key}: {state_score:.2}"));
            score = score * STATE_BLEND + state_score * (1.0 - STATE_BLEND);
        }

        if let Some(rating) = credit.rating {
            let rating_score = self.rating_score(rating);
            factors.push(format!("Rating {rating}: {rating_score:.2}"));
            score = score * RATING_BLEND + rating_score * (1.0 - RATING_BLEND);
        }

        if credit.insured {
            score += INSURED_BONUS;
            factors.push(format!("Insured: +{INSURED_BONUS:.2}"));
        }

        if let Some(underlying) = credit.underlying_rating {
            if self.rating_score(underlying) > UNDERLYING_THRESHOLD {
                score += UNDERLYING_BONUS;
                factors.push(format!(
                    "Underlying rating {underlying}: +{UNDERLYING_BONUS:.2}"
                ));
            }
        }

        log::trace!("{}: stability raw {:.3}", issuer.name, score);
        StabilityScore::finish(score, factors)
    }

    fn rating_score(&self, rating: CreditRating) -> f64 {
        self.tables
            .rating_score(rating)
            .unwrap_or(self.tables.unknown_rating)
    }
}
