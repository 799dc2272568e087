//! stock-quote-alert Library
//!
//! A Rust library that polls the Alpha Vantage quote API for a single
//! B3-listed instrument and sends an email alert whenever the price
//! crosses the configured sell/buy thresholds.

pub mod alert;
pub mod alphavantage;
pub mod common;
pub mod config;
pub mod monitor;

// Re-export commonly used types
pub use alert::evaluator::evaluate;
pub use alert::notifier::{validate_mail_config, EmailNotifier, MissingField};
pub use alphavantage::client::AlphaVantageClient;
pub use common::errors::{MonitorError, Result};
pub use common::traits::{AlertSink, QuoteSource};
pub use common::types::{AlertEvent, Decision, MonitorTarget, QuoteObservation};
pub use config::loader::load_config;
pub use config::types::{AppConfig, MailConfig, MonitorSettings, ProviderConfig};
pub use monitor::QuoteMonitor;
