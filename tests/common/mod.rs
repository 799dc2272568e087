//! Common test utilities and fixtures

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use stock_quote_alert::common::traits::AlertSink;
use stock_quote_alert::common::types::AlertEvent;
use stock_quote_alert::config::types::ProviderConfig;

/// Provider configuration pointed at a mock server
pub fn provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        api_key: Some("demo".to_string()),
        base_url: base_url.to_string(),
        market_suffix: ".SA".to_string(),
    }
}

/// Build a well-formed GLOBAL_QUOTE body with the given price string
pub fn global_quote_body(symbol: &str, price: &str) -> String {
    format!(
        r#"{{
            "Global Quote": {{
                "01. symbol": "{symbol}",
                "02. open": "31.0000",
                "03. high": "31.9000",
                "04. low": "30.8000",
                "05. price": "{price}",
                "06. volume": "48837500",
                "07. latest trading day": "2024-01-15",
                "08. previous close": "31.1000",
                "09. change": "0.4000",
                "10. change percent": "1.2862%"
            }}
        }}"#
    )
}

/// Sample API responses for testing the defensive parse path
pub mod api_responses {
    /// Payload without the "Global Quote" object
    pub const MISSING_TOP_KEY: &str = r#"{"unexpected": {}}"#;

    /// Quote object without the price field
    pub const MISSING_PRICE: &str =
        r#"{"Global Quote": {"01. symbol": "PETR4.SA", "06. volume": "123"}}"#;

    /// Quote object with an explicit null price
    pub const NULL_PRICE: &str = r#"{"Global Quote": {"05. price": null}}"#;

    /// Quote object with a blank price string
    pub const BLANK_PRICE: &str = r#"{"Global Quote": {"05. price": "  "}}"#;

    /// Quote object with a non-numeric price string
    pub const NON_NUMERIC_PRICE: &str = r#"{"Global Quote": {"05. price": "n/a"}}"#;

    /// Rate-limit notice delivered with HTTP 200
    pub const RATE_LIMIT_NOTE: &str =
        r#"{"Note": "Thank you for using Alpha Vantage! Please consider upgrading."}"#;
}

/// Alert sink that records every delivered alert
#[derive(Clone, Default)]
pub struct RecordingSink {
    alerts: Arc<Mutex<Vec<AlertEvent>>>,
}

impl RecordingSink {
    pub fn alerts(&self) -> Vec<AlertEvent> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for RecordingSink {
    async fn notify(&self, alert: &AlertEvent) -> bool {
        self.alerts.lock().unwrap().push(alert.clone());
        true
    }
}
