//! Latest market snapshot for a bond.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;

/// Latest trading snapshot for a bond.
///
/// Every quote is optional: thinly traded bonds routinely lack one or more
/// fields and consumers fall back to neutral defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Date the snapshot was taken. Recency is measured from here.
    pub as_of: Date,

    /// Last price per 100 par.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Yield to worst, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ytw: Option<f64>,

    /// Modified duration in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Best bid price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<f64>,

    /// Best ask price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<f64>,

    /// Number of prints in the trailing 30 days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_count_30d: Option<u32>,

    /// Dollar volume traded in the trailing 30 days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_30d: Option<Decimal>,

    /// Date of the most recent print.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_trade_date: Option<Date>,
}

impl MarketData {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new(as_of: Date) -> Self {
        Self {
            as_of,
            price: None,
            ytw: None,
            duration: None,
            bid: None,
            ask: None,
            trade_count_30d: None,
            volume_30d: None,
            last_trade_date: None,
        }
    }

    /// Sets the quoted price and yield to worst.
    #[must_use]
    pub fn with_quote(mut self, price: f64, ytw: f64) -> Self {
        self.price = Some(price);
        self.ytw = Some(ytw);
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets bid and ask.
    #[must_use]
    pub fn with_bid_ask(mut self, bid: f64, ask: f64) -> Self {
        self.bid = Some(bid);
        self.ask = Some(ask);
        self
    }

    /// Sets trailing 30-day trade count and dollar volume.
    #[must_use]
    pub fn with_activity(mut self, trade_count: u32, volume: Decimal) -> Self {
        self.trade_count_30d = Some(trade_count);
        self.volume_30d = Some(volume);
        self
    }

    /// Sets the last trade date.
    #[must_use]
    pub fn with_last_trade(mut self, date: Date) -> Self {
        self.last_trade_date = Some(date);
        self
    }

    /// Calendar days from the last trade to the snapshot date.
    ///
    /// Clamped at zero so a print dated after the snapshot counts as today.
    #[must_use]
    pub fn days_since_last_trade(&self) -> Option<i64> {
        self.last_trade_date
            .map(|traded| traded.days_between(&self.as_of).max(0))
    }

    /// Mid price, when both sides are quoted and positive.
    #[must_use]
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) if bid > 0.0 && ask > 0.0 => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Bid/ask spread as a percent of mid.
    #[must_use]
    pub fn bid_ask_spread_pct(&self) -> Option<f64> {
        let mid = self.mid()?;
        let (bid, ask) = (self.bid?, self.ask?);
        Some((ask - bid).abs() / mid * 100.0)
    }
}
