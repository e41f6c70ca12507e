//! Integration tests for stability and liquidity scoring.

use approx::assert_relative_eq;
use rust_decimal_macros::dec;
use yieldrank_core::types::{
    BondData, BondType, CreditProfile, CreditRating, Date, Issuer, IssuerType, MarketData,
};
use yieldrank_scoring::prelude::*;

fn as_of() -> Date {
    Date::from_ymd(2025, 4, 1).unwrap()
}

fn water_authority() -> (Issuer, CreditProfile) {
    let issuer = Issuer::new("Fairfax Water Authority", IssuerType::Authority)
        .with_sector("Water & Sewer")
        .with_state("va");
    let credit = CreditProfile::rated(CreditRating::AA).with_insurance(Some(CreditRating::APlus));
    (issuer, credit)
}

fn muni(price: f64) -> BondData {
    BondData::new(
        "303891AB0",
        BondType::Municipal,
        3.2,
        price,
        4.0,
        Date::from_ymd(2033, 10, 1).unwrap(),
    )
    .with_state("VA")
    .with_tax_exemptions(true, true)
}

// =============================================================================
// Stability
// =============================================================================

#[test]
fn test_revenue_issuer_full_blend() {
    let (issuer, credit) = water_authority();
    let result = StabilityScorer::new().score(&issuer, &credit);

    // sector 0.95, state 0.95, rating 0.90, insured, underlying A+ (0.80)
    let expected = ((0.5 * 0.3 + 0.95 * 0.7) * 0.8 + 0.95 * 0.2) * 0.6 + 0.90 * 0.4 + 0.05 + 0.03;
    assert_relative_eq!(result.score, expected, epsilon = 1e-12);
    assert_eq!(
        result.factors,
        vec![
            "Sector water-sewer: 0.95".to_string(),
            "State VA: 0.95".to_string(),
            "Rating AA: 0.90".to_string(),
            "Insured: +0.05".to_string(),
            "Underlying rating A+: +0.03".to_string(),
        ]
    );
}

#[test]
fn test_overridden_tables_change_only_the_overridden_entry() {
    let tables = ScoreTables::from_toml_str("[sectors]\n\"Water & Sewer\" = 0.40\n").unwrap();
    assert_eq!(tables.sector_score("water-sewer"), Some(0.40));
    assert_eq!(tables.state_score("VA"), ScoreTables::standard().state_score("VA"));

    let (issuer, credit) = water_authority();
    let standard = StabilityScorer::new().score(&issuer, &credit);
    let custom = StabilityScorer::with_tables(&tables).score(&issuer, &credit);

    let expected = ((0.5 * 0.3 + 0.40 * 0.7) * 0.8 + 0.95 * 0.2) * 0.6 + 0.90 * 0.4 + 0.05 + 0.03;
    assert_relative_eq!(custom.score, expected, epsilon = 1e-12);
    assert!(custom.score < standard.score);
}

#[test]
fn test_invalid_override_rejected() {
    assert!(ScoreTables::from_toml_str("[ratings]\nAAA = 1.2\n").is_err());
    assert!(ScoreTables::from_toml_str("[ratings]\n\"Q+\" = 0.5\n").is_err());
    assert!(ScoreTables::from_toml_str("[colours]\nred = 0.5\n").is_err());
}

// =============================================================================
// Liquidity
// =============================================================================

#[test]
fn test_actively_traded_bond_clamps_at_one() {
    let market = MarketData::new(as_of())
        .with_last_trade(as_of())
        .with_bid_ask(99.9, 100.1)
        .with_activity(25, dec!(2_000_000));
    let bond = muni(100.0).with_min_denomination(dec!(5000));

    let result = LiquidityScorer::new().score(&bond, Some(&market));

    assert_relative_eq!(result.score, 1.0);
    assert_eq!(result.factors.len(), 5);
}

#[test]
fn test_stale_wide_large_lot_bond() {
    let market = MarketData::new(as_of())
        .with_last_trade(as_of() - 90)
        .with_bid_ask(97.0, 99.0)
        .with_activity(1, dec!(50_000));
    let bond = muni(98.0).with_min_denomination(dec!(100_000));

    let result = LiquidityScorer::new().score(&bond, Some(&market));

    assert_relative_eq!(result.score, 0.5 - 0.10 - 0.05 - 0.05, epsilon = 1e-12);
}

#[test]
fn test_missing_snapshot_is_neutral() {
    let result = LiquidityScorer::new().score(&muni(100.0), None);
    assert_relative_eq!(result.score, 0.5);
    assert_eq!(result.factors, vec!["No market data".to_string()]);
}
