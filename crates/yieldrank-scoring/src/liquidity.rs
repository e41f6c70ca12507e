//! Liquidity scoring from the latest market snapshot.
//!
//! Tiers, each applied only when its input is present:
//! - Trade recency: within 1 day +0.25, 7 days +0.15, 30 days +0.05, older -0.10
//! - 30-day trade count: 20+ trades +0.20, 10+ +0.10, 5+ +0.05
//! - Bid/ask spread (% of mid): under 0.5% +0.15, under 1% +0.05, wider -0.05
//! - Minimum denomination: $5,000 or less +0.05, $25,000 or more -0.05
//! - 30-day volume above $1,000,000: +0.10

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use yieldrank_core::types::{BondData, MarketData};

use crate::score::{LiquidityScore, NEUTRAL_SCORE};

/// Recency tiers as (maximum days since last trade, adjustment).
pub const RECENCY_TIERS: [(i64, f64); 3] = [(1, 0.25), (7, 0.15), (30, 0.05)];

/// Adjustment when the last trade is older than every recency tier.
pub const STALE_TRADE_PENALTY: f64 = -0.10;

/// Trade-count tiers as (minimum trades in 30 days, adjustment).
pub const TRADE_COUNT_TIERS: [(u32, f64); 3] = [(20, 0.20), (10, 0.10), (5, 0.05)];

/// Spread tiers as (spread % of mid strictly below, adjustment).
pub const SPREAD_TIERS: [(f64, f64); 2] = [(0.5, 0.15), (1.0, 0.05)];

/// Adjustment when the spread is wider than every tier.
pub const WIDE_SPREAD_PENALTY: f64 = -0.05;

/// Denominations at or below this trade easily in retail size.
pub const SMALL_DENOMINATION: Decimal = dec!(5000);

/// Denominations at or above this shut out most retail buyers.
pub const LARGE_DENOMINATION: Decimal = dec!(25000);

/// Adjustment magnitude for small or large denominations.
pub const DENOMINATION_ADJUSTMENT: f64 = 0.05;

/// 30-day dollar volume that must be exceeded for the volume bonus.
pub const VOLUME_THRESHOLD: Decimal = dec!(1_000_000);

/// Bonus for heavy 30-day volume.
pub const VOLUME_BONUS: f64 = 0.10;

/// Scores how readily a bond trades.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityScorer;

impl LiquidityScorer {
    /// Creates a scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scores `bond` from its latest snapshot.
    ///
    /// Without a snapshot the score is a neutral 0.5.
    #[must_use]
    pub fn score(&self, bond: &BondData, market: Option<&MarketData>) -> LiquidityScore {
        let Some(market) = market else {
            log::debug!("{}: no market data, liquidity neutral", bond.cusip);
            return LiquidityScore::neutral("No market data");
        };

        let mut score = NEUTRAL_SCORE;
        let mut factors = Vec::new();

        if let Some(days) = market.days_since_last_trade() {
            let adjustment = RECENCY_TIERS
                .iter()
                .find(|(max_days, _)| days <= *max_days)
                .map_or(STALE_TRADE_PENALTY, |(_, adj)| *adj);
            score += adjustment;
            factors.push(format!("Last trade {days}d ago: {adjustment:+.2}"));
        }

        if let Some(count) = market.trade_count_30d {
            if let Some((_, adjustment)) = TRADE_COUNT_TIERS
                .iter()
                .find(|(min_trades, _)| count >= *min_trades)
            {
                score += adjustment;
                factors.push(format!("{count} trades in 30 days: {adjustment:+.2}"));
            }
        }

        if let Some(spread) = market.bid_ask_spread_pct() {
            let adjustment = SPREAD_TIERS
                .iter()
                .find(|(below, _)| spread < *below)
                .map_or(WIDE_SPREAD_PENALTY, |(_, adj)| *adj);
            score += adjustment;
            factors.push(format!("Bid/ask spread {spread:.2}%: {adjustment:+.2}"));
        }

        if let Some(denomination) = bond.min_denomination {
            let adjustment = if denomination <= SMALL_DENOMINATION {
                Some(DENOMINATION_ADJUSTMENT)
            } else if denomination >= LARGE_DENOMINATION {
                Some(-DENOMINATION_ADJUSTMENT)
            } else {
                None
            };
            if let Some(adjustment) = adjustment {
                score += adjustment;
                factors.push(format!(
                    "Minimum denomination ${denomination}: {adjustment:+.2}"
                ));
            }
        }

        if let Some(volume) = market.volume_30d {
            if volume > VOLUME_THRESHOLD {
                score += VOLUME_BONUS;
                factors.push(format!("30-day volume ${volume}: {VOLUME_BONUS:+.2}"));
            }
        }

        log::trace!("{}: liquidity raw {:.3}", bond.cusip, score);
        LiquidityScore::finish(score, factors)
    }
}
