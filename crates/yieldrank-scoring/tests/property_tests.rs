//! Property-based tests for score bounds.
//!
//! Whatever the inputs, both scores stay inside [0, 1] and every applied
//! rule leaves a factor behind.

use proptest::prelude::*;
use rust_decimal::Decimal;
use yieldrank_core::types::{
    BondData, BondType, CreditProfile, CreditRating, Date, Issuer, IssuerType, MarketData,
};
use yieldrank_scoring::prelude::*;

fn issuer_type() -> impl Strategy<Value = IssuerType> {
    prop::sample::select(vec![
        IssuerType::Municipality,
        IssuerType::County,
        IssuerType::State,
        IssuerType::Authority,
        IssuerType::SchoolDistrict,
        IssuerType::Corporation,
        IssuerType::FederalAgency,
        IssuerType::FederalGovernment,
        IssuerType::Other,
    ])
}

fn rating() -> impl Strategy<Value = CreditRating> {
    prop::sample::select(vec![
        CreditRating::AAA,
        CreditRating::AAPlus,
        CreditRating::AA,
        CreditRating::AMinus,
        CreditRating::BBBMinus,
        CreditRating::BB,
        CreditRating::CCC,
        CreditRating::D,
        CreditRating::NotRated,
    ])
}

fn sector() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Water & Sewer",
        "toll-road",
        "Hospital",
        "industrial development",
        "stadium",
        "",
    ])
    .prop_map(str::to_string)
}

fn state() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["VA", "il", "NJ", "TX", "PR", "zz"]).prop_map(str::to_string)
}

fn as_of() -> Date {
    Date::from_ymd(2025, 2, 3).unwrap()
}

proptest! {
    #[test]
    fn property_stability_in_unit_interval(
        issuer_type in issuer_type(),
        sector in prop::option::of(sector()),
        state in prop::option::of(state()),
        rating in prop::option::of(rating()),
        insured in any::<bool>(),
        underlying in prop::option::of(rating()),
    ) {
        let issuer = Issuer { name: "Issuer".to_string(), issuer_type, sector, state };
        let credit = CreditProfile { rating, insured, underlying_rating: underlying };

        let result = StabilityScorer::new().score(&issuer, &credit);
        prop_assert!((0.0..=1.0).contains(&result.score));
        if insured {
            prop_assert!(result.factors.iter().any(|f| f.starts_with("Insured")));
        }
    }

    #[test]
    fn property_liquidity_in_unit_interval(
        days_ago in prop::option::of(-5i64..400),
        trades in prop::option::of(0u32..100),
        bid in prop::option::of(0.0..150.0f64),
        spread in 0.0..10.0f64,
        denomination in prop::option::of(0i64..200_000),
        volume in prop::option::of(0i64..50_000_000),
    ) {
        let mut market = MarketData::new(as_of());
        market.last_trade_date = days_ago.map(|d| as_of() - d);
        market.trade_count_30d = trades;
        if let Some(bid) = bid {
            market = market.with_bid_ask(bid, bid + spread);
        }
        market.volume_30d = volume.map(Decimal::from);

        let mut bond = BondData::new("P", BondType::Municipal, 3.0, 100.0, 3.0, as_of() + 3650);
        bond.min_denomination = denomination.map(Decimal::from);

        let result = LiquidityScorer::new().score(&bond, Some(&market));
        prop_assert!((0.0..=1.0).contains(&result.score));
    }
}
