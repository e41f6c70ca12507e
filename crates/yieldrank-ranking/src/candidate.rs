//! Candidate scoring pipeline.
//!
//! Each [`CandidateInput`] becomes a [`RankedBond`] carrying its after-tax
//! yield and both scores. Ranks are left unset; only the ranking engine
//! assigns them.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondData, CreditProfile, Issuer, MarketData, TaxProfile};
use yieldrank_scoring::{LiquidityScorer, ScoreTables, StabilityScorer};
use yieldrank_tax::AtytwCalculator;

use crate::config::RankingConfig;
use crate::parallel::maybe_parallel_map;

/// Everything known about one bond before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInput {
    /// Bond terms.
    pub bond: BondData,
    /// Issuer.
    pub issuer: Issuer,
    /// Rating and credit enhancement.
    #[serde(default)]
    pub credit: CreditProfile,
    /// Latest market snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketData>,
}

impl CandidateInput {
    /// Creates an unrated candidate with no market data.
    #[must_use]
    pub fn new(bond: BondData, issuer: Issuer) -> Self {
        Self {
            bond,
            issuer,
            credit: CreditProfile::default(),
            market: None,
        }
    }

    /// Sets the credit profile.
    #[must_use]
    pub fn with_credit(mut self, credit: CreditProfile) -> Self {
        self.credit = credit;
        self
    }

    /// Sets the market snapshot.
    #[must_use]
    pub fn with_market(mut self, market: MarketData) -> Self {
        self.market = Some(market);
        self
    }

    /// Bond terms repriced at the snapshot's quoted price and yield.
    ///
    /// Quotes that are missing, non-finite, or (for price) not positive
    /// leave the static terms in place.
    #[must_use]
    pub fn quoted_bond(&self) -> BondData {
        let mut bond = self.bond.clone();
        if let Some(market) = &self.market {
            if let Some(price) = market.price.filter(|p| p.is_finite() && *p > 0.0) {
                bond.price = price;
            }
            if let Some(ytw) = market.ytw.filter(|y| y.is_finite()) {
                bond.ytw = ytw;
            }
        }
        bond
    }
}

/// A scored bond, ranked or awaiting rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBond {
    /// Bond terms.
    pub bond: BondData,
    /// Issuer.
    pub issuer: Issuer,
    /// Rating and credit enhancement.
    pub credit: CreditProfile,
    /// Snapshot the liquidity score was computed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketData>,
    /// After-tax yield to worst, percent.
    pub atytw: f64,
    /// Quoted yield to worst, percent.
    pub pre_tax_ytw: f64,
    /// Stability score in `[0, 1]`.
    pub stability_score: f64,
    /// Liquidity score in `[0, 1]`.
    pub liquidity_score: f64,
    /// 1-based rank, set by the ranking engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// After-tax computation trail.
    pub explanation: Vec<String>,
    /// Factors behind the stability score.
    #[serde(default)]
    pub stability_factors: Vec<String>,
    /// Factors behind the liquidity score.
    #[serde(default)]
    pub liquidity_factors: Vec<String>,
}

impl RankedBond {
    /// Modified duration from the market snapshot, if known.
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.market.as_ref().and_then(|m| m.duration)
    }

    /// Days since the last print, if known.
    #[must_use]
    pub fn days_since_last_trade(&self) -> Option<i64> {
        self.market.as_ref().and_then(MarketData::days_since_last_trade)
    }
}

/// Computes after-tax yield, stability and liquidity for candidates.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScorer<'t> {
    calculator: AtytwCalculator,
    stability: StabilityScorer<'t>,
    liquidity: LiquidityScorer,
}

impl<'t> CandidateScorer<'t> {
    /// Creates a scorer for the config's as-of date over `tables`.
    #[must_use]
    pub fn new(config: &RankingConfig, tables: &'t ScoreTables) -> Self {
        Self {
            calculator: AtytwCalculator::new(config.as_of_or_today()),
            stability: StabilityScorer::with_tables(tables),
            liquidity: LiquidityScorer::new(),
        }
    }

    /// Scores one candidate for `profile` at its latest quotes.
    #[must_use]
    pub fn score(&self, input: &CandidateInput, profile: &TaxProfile) -> RankedBond {
        let bond = input.quoted_bond();
        let after_tax = self.calculator.compute(&bond, profile);
        let stability = self.stability.score(&input.issuer, &input.credit);
        let liquidity = self.liquidity.score(&bond, input.market.as_ref());

        RankedBond {
            bond,
            issuer: input.issuer.clone(),
            credit: input.credit.clone(),
            market: input.market.clone(),
            atytw: after_tax.atytw,
            pre_tax_ytw: after_tax.pre_tax_ytw,
            stability_score: stability.score,
            liquidity_score: liquidity.score,
            rank: None,
            explanation: after_tax.explanation,
            stability_factors: stability.factors,
            liquidity_factors: liquidity.factors,
        }
    }
}

/// Scores every candidate for `profile`, preserving input order.
///
/// Fans out across threads when `config` allows it for this batch size.
#[must_use]
pub fn score_candidates(
    inputs: &[CandidateInput],
    profile: &TaxProfile,
    config: &RankingConfig,
    tables: &ScoreTables,
) -> Vec<RankedBond> {
    let scorer = CandidateScorer::new(config, tables);
    log::debug!(
        "scoring {} candidates (parallel: {})",
        inputs.len(),
        config.should_parallelize(inputs.len())
    );
    maybe_parallel_map(inputs, config, |input| scorer.score(input, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldrank_core::types::{BondType, CreditRating, Date, FilingStatus, IssuerType};

    fn as_of() -> Date {
        Date::from_ymd(2025, 3, 3).unwrap()
    }

    fn candidate(cusip: &str, ytw: f64) -> CandidateInput {
        let bond = BondData::new(
            cusip,
            BondType::Municipal,
            ytw,
            100.0,
            4.0,
            Date::from_ymd(2032, 3, 1).unwrap(),
        )
        .with_state("VA")
        .with_tax_exemptions(true, true);
        CandidateInput::new(bond, Issuer::new("Henrico County", IssuerType::County).with_state("VA"))
            .with_credit(CreditProfile::rated(CreditRating::AAA))
    }

    #[test]
    fn test_score_candidates_preserves_order() {
        let profile = TaxProfile::new("VA", FilingStatus::Single, 0.32, 0.0575);
        let config = RankingConfig::sequential().with_as_of(as_of());
        let inputs = vec![candidate("A", 3.1), candidate("B", 3.4), candidate("C", 2.9)];

        let scored = score_candidates(&inputs, &profile, &config, ScoreTables::standard());

        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].bond.cusip, "A");
        assert_eq!(scored[2].bond.cusip, "C");
        assert!(scored.iter().all(|b| b.rank.is_none()));
        assert_relative_eq!(scored[1].atytw, 3.4);
    }

    #[test]
    fn test_scores_attached() {
        let profile = TaxProfile::new("VA", FilingStatus::Single, 0.32, 0.0575);
        let config = RankingConfig::sequential().with_as_of(as_of());
        let market = MarketData::new(as_of()).with_duration(5.8).with_last_trade(as_of() - 3);
        let input = candidate("A", 3.1).with_market(market);

        let scored = CandidateScorer::new(&config, ScoreTables::standard()).score(&input, &profile);

        assert_eq!(scored.duration(), Some(5.8));
        assert_eq!(scored.days_since_last_trade(), Some(3));
        assert_relative_eq!(scored.liquidity_score, 0.65, epsilon = 1e-12);
        assert!(scored.stability_score > 0.8);
        assert!(!scored.stability_factors.is_empty());
    }

    #[test]
    fn test_snapshot_quotes_drive_after_tax_yield() {
        let profile = TaxProfile::new("TX", FilingStatus::Single, 0.24, 0.0);
        let config = RankingConfig::sequential().with_as_of(as_of());
        let bond = BondData::new(
            "14040HCE3",
            BondType::Corporate,
            5.0,
            100.0,
            4.5,
            Date::from_ymd(2032, 3, 1).unwrap(),
        );
        let input = CandidateInput::new(bond, Issuer::new("Capital One", IssuerType::Corporation))
            .with_market(MarketData::new(as_of()).with_quote(90.0, 7.0));

        let scored = CandidateScorer::new(&config, ScoreTables::standard()).score(&input, &profile);

        assert_relative_eq!(scored.pre_tax_ytw, 7.0);
        assert_relative_eq!(scored.bond.price, 90.0);
        assert!(scored.atytw < 7.0 * (1.0 - 0.24));
        assert!(scored
            .explanation
            .iter()
            .any(|line| line.contains("below de minimis threshold")));
    }

    #[test]
    fn test_invalid_quotes_keep_static_terms() {
        let mut market = MarketData::new(as_of()).with_quote(0.0, f64::NAN);
        let input = candidate("A", 3.1).with_market(market.clone());
        let bond = input.quoted_bond();
        assert_relative_eq!(bond.price, 100.0);
        assert_relative_eq!(bond.ytw, 3.1);

        market.price = None;
        market.ytw = Some(3.3);
        let bond = candidate("A", 3.1).with_market(market).quoted_bond();
        assert_relative_eq!(bond.price, 100.0);
        assert_relative_eq!(bond.ytw, 3.3);
    }

    #[test]
    fn test_candidate_input_serde_defaults() {
        let json = r#"{
            "bond": {
                "cusip": "438670AB7",
                "bond_type": "Corporate",
                "ytw": 5.1,
                "price": 99.0,
                "coupon": 5.0,
                "maturity": "2031-06-15"
            },
            "issuer": {"name": "Honeywell", "issuer_type": "Corporation"}
        }"#;
        let input: CandidateInput = serde_json::from_str(json).unwrap();
        assert!(input.market.is_none());
        assert_eq!(input.credit, CreditProfile::default());
    }
}
