//! Configuration types
//!
//! The settings file uses Portuguese key names
//! (`EmailDestino`, `SmtpHost`, ...). Each field also carries a lowercase
//! serde alias because the `config` crate normalizes keys to lowercase
//! before deserializing.

use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// The mail settings live at the root of `appsettings.json`; provider and
/// monitor settings are optional sections with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SMTP relay and destination settings
    #[serde(flatten)]
    pub mail: MailConfig,
    /// Quote provider settings
    #[serde(rename = "Provider", alias = "provider", default)]
    pub provider: ProviderConfig,
    /// General monitoring settings
    #[serde(rename = "Settings", alias = "settings", default)]
    pub settings: MonitorSettings,
}

/// SMTP relay and destination address settings
///
/// Host and port fall back to empty/zero when absent; the notifier surfaces
/// the resulting transport failure at send time. The three credential-like
/// fields stay optional because their presence is checked by an explicit
/// validation pass before any send attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailConfig {
    /// Address that receives the alert emails
    #[serde(rename = "EmailDestino", alias = "emaildestino", default)]
    pub destination_email: Option<String>,
    /// SMTP relay hostname
    #[serde(rename = "SmtpHost", alias = "smtphost", default)]
    pub smtp_host: String,
    /// SMTP submission port (587 for STARTTLS on most relays)
    #[serde(rename = "SmtpPort", alias = "smtpport", default)]
    pub smtp_port: u16,
    /// SMTP username, also used as the From address
    #[serde(rename = "SmtpUser", alias = "smtpuser", default)]
    pub smtp_user: Option<String>,
    /// SMTP password
    #[serde(rename = "SmtpPass", alias = "smtppass", default)]
    pub smtp_pass: Option<String>,
}

/// Quote provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for the quote provider
    ///
    /// May also come from the ALPHAVANTAGE_API_KEY environment variable;
    /// the loader fills it in when the file leaves it out.
    #[serde(rename = "ApiKey", alias = "apikey", default)]
    pub api_key: Option<String>,
    /// Base URL for the quote API
    #[serde(rename = "BaseUrl", alias = "baseurl", default = "default_base_url")]
    pub base_url: String,
    /// Suffix appended to every symbol before querying (".SA" for B3 listings)
    #[serde(rename = "MarketSuffix", alias = "marketsuffix", default = "default_market_suffix")]
    pub market_suffix: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            market_suffix: default_market_suffix(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.alphavantage.co".to_string()
}

fn default_market_suffix() -> String {
    ".SA".to_string()
}

/// General monitoring settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Fixed delay between poll cycles in seconds
    #[serde(
        rename = "PollIntervalSecs",
        alias = "pollintervalsecs",
        default = "default_poll_interval"
    )]
    pub poll_interval_secs: u64,
    /// Request timeout for quote fetches in seconds
    #[serde(
        rename = "RequestTimeoutSecs",
        alias = "requesttimeoutsecs",
        default = "default_request_timeout"
    )]
    pub request_timeout_secs: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_poll_interval() -> u64 {
    60
}

fn default_request_timeout() -> u64 {
    30
}
