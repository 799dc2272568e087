//! Alpha Vantage response types
//!
//! The GLOBAL_QUOTE payload keys its fields with numbered names
//! ("05. price" and friends). Every field is optional: the API answers
//! HTTP 200 with an empty quote object for unknown symbols, and with a
//! "Note" or "Error Message" body when the key is throttled or invalid.

use serde::{Deserialize, Serialize};

/// Top-level payload returned by the GLOBAL_QUOTE function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalQuoteResponse {
    /// Quote object, absent on throttle/error responses
    #[serde(rename = "Global Quote", default)]
    pub global_quote: Option<GlobalQuote>,
    /// Rate-limit notice, sent with HTTP 200
    #[serde(rename = "Note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Error description for invalid requests, also sent with HTTP 200
    #[serde(
        rename = "Error Message",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

/// Single-instrument quote as Alpha Vantage ships it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol", default)]
    pub symbol: Option<String>,
    #[serde(rename = "02. open", default)]
    pub open: Option<String>,
    #[serde(rename = "03. high", default)]
    pub high: Option<String>,
    #[serde(rename = "04. low", default)]
    pub low: Option<String>,
    #[serde(rename = "05. price", default)]
    pub price: Option<String>,
    #[serde(rename = "06. volume", default)]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day", default)]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close", default)]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change", default)]
    pub change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    pub change_percent: Option<String>,
}
