//! Unified types used across the monitoring pipeline

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The instrument under watch and its alert thresholds
///
/// Supplied once at startup from the command line and immutable for the
/// process lifetime. Neither positivity nor `sell_price > buy_price` is
/// enforced; a degenerate configuration simply changes which alert fires
/// first (see [`crate::alert::evaluator::evaluate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTarget {
    /// Ticker symbol without the market suffix (e.g. "PETR4")
    pub symbol: String,
    /// Alert when the price rises to or above this value
    pub sell_price: Decimal,
    /// Alert when the price falls to or below this value
    pub buy_price: Decimal,
}

impl MonitorTarget {
    pub fn new(symbol: impl Into<String>, sell_price: Decimal, buy_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            sell_price,
            buy_price,
        }
    }
}

/// A successfully observed quote for one poll cycle
///
/// Only constructed when the fetch succeeded; a failed fetch produces an
/// error, never a placeholder observation. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteObservation {
    pub symbol: String,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl QuoteObservation {
    /// Create an observation stamped with the current time
    pub fn now(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            timestamp: Utc::now(),
        }
    }
}

/// Payload handed to the notifier when a threshold is crossed
///
/// Ephemeral: built inside the cycle that detected the crossing and consumed
/// immediately by the alert sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub symbol: String,
    pub price: Decimal,
    /// Human-readable reason, in the wording the alert email uses
    pub reason: &'static str,
}

/// Outcome of comparing an observed price against the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Price rose to or above the sell threshold
    SellAlert,
    /// Price fell to or below the buy threshold
    BuyAlert,
    /// Price is strictly between the thresholds
    NoAlert,
}

impl Decision {
    /// Reason text carried into the alert email, if this decision alerts
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Decision::SellAlert => Some("subiu acima do preço de VENDA"),
            Decision::BuyAlert => Some("caiu abaixo do preço de COMPRA"),
            Decision::NoAlert => None,
        }
    }

    /// Returns true if this decision triggers a notification
    pub fn is_alert(&self) -> bool {
        !matches!(self, Decision::NoAlert)
    }
}
