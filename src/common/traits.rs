//! Trait definitions for the monitoring pipeline seams

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::errors::Result;
use super::types::AlertEvent;

/// Trait for quote providers (Alpha Vantage, test doubles, etc.)
///
/// Implementations issue one request per call, with no retry; the poll
/// loop's fixed cadence is the only recovery mechanism.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the current price for a ticker symbol
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol without the market suffix
    ///
    /// # Returns
    /// The quoted price, or an error when the provider is unreachable or
    /// the payload carried no usable price.
    async fn latest_price(&self, symbol: &str) -> Result<Decimal>;

    /// Name of the provider, for log lines
    fn provider_name(&self) -> &'static str;
}

/// Trait for alert delivery channels
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one alert
    ///
    /// Returns whether delivery succeeded. Implementations log their own
    /// failures and never propagate them; a dropped alert must not stop
    /// the monitoring loop.
    async fn notify(&self, alert: &AlertEvent) -> bool;
}
