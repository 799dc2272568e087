//! REST client for the Alpha Vantage quote API

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, instrument};

use super::messages::GlobalQuoteResponse;
use crate::common::errors::{MonitorError, Result};
use crate::common::traits::QuoteSource;
use crate::config::types::ProviderConfig;

/// REST client for the Alpha Vantage GLOBAL_QUOTE endpoint
///
/// The inner `reqwest::Client` lives for the process lifetime, so every
/// cycle reuses the same connection pool.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    /// HTTP client
    client: Client,
    /// Base URL for the quote API
    base_url: String,
    /// API key, injected at startup
    api_key: String,
    /// Suffix appended to every queried symbol
    market_suffix: String,
}

impl AlphaVantageClient {
    /// Create a new client with the default request timeout
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(config: &ProviderConfig, timeout: Duration) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            MonitorError::Configuration(
                "Chave de API do provedor de cotações não configurada.".to_string(),
            )
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            market_suffix: config.market_suffix.clone(),
        })
    }

    /// Fetch the current quote for a symbol
    ///
    /// One attempt per call: any network failure, non-2xx status or
    /// unusable payload comes back as an error for the caller to log.
    #[instrument(skip(self))]
    pub async fn global_quote(&self, symbol: &str) -> Result<Decimal> {
        let url = format!(
            "{}/query?function=GLOBAL_QUOTE&symbol={}{}&apikey={}",
            self.base_url, symbol, self.market_suffix, self.api_key
        );
        debug!("Fetching quote for {}{}", symbol, self.market_suffix);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MonitorError::InvalidResponse(format!(
                "Server returned status {}: {}",
                status, body
            )));
        }

        let payload: GlobalQuoteResponse = response.json().await?;
        Self::extract_price(payload)
    }

    /// Pull the price out of the payload
    ///
    /// A missing quote object, missing price field, null or blank string
    /// all count as "no price available"; so does a non-numeric value.
    fn extract_price(payload: GlobalQuoteResponse) -> Result<Decimal> {
        if let Some(note) = payload.note {
            return Err(MonitorError::InvalidResponse(note));
        }
        if let Some(message) = payload.error_message {
            return Err(MonitorError::InvalidResponse(message));
        }

        let price_str = payload
            .global_quote
            .and_then(|quote| quote.price)
            .unwrap_or_default();

        if price_str.trim().is_empty() {
            return Err(MonitorError::PriceUnavailable(
                "valor nulo ou vazio".to_string(),
            ));
        }

        price_str.trim().parse::<Decimal>().map_err(|_| {
            MonitorError::PriceUnavailable(format!("valor não numérico: {price_str:?}"))
        })
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn latest_price(&self, symbol: &str) -> Result<Decimal> {
        self.global_quote(symbol).await
    }

    fn provider_name(&self) -> &'static str {
        "alphavantage"
    }
}
