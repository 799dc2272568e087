//! stock-quote-alert - Main Entry Point
//!
//! Monitors one B3-listed instrument against sell/buy price thresholds
//! and emails an alert whenever a threshold is crossed.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stock_quote_alert::alert::notifier::EmailNotifier;
use stock_quote_alert::alphavantage::client::AlphaVantageClient;
use stock_quote_alert::common::types::MonitorTarget;
use stock_quote_alert::config::loader::load_config;
use stock_quote_alert::monitor::QuoteMonitor;

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticker symbol to monitor (the configured market suffix is appended)
    symbol: String,

    /// Sell threshold: alert when the price rises to or above this value
    sell_price: Decimal,

    /// Buy threshold: alert when the price falls to or below this value
    buy_price: Decimal,

    /// Path to the settings file
    #[arg(short, long, default_value = "appsettings.json")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments; missing or non-numeric prices exit
    // here with a usage message before anything else starts
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(&args.config)
        .context("não foi possível carregar as configurações")?;

    let timeout = Duration::from_secs(config.settings.request_timeout_secs);
    let client = AlphaVantageClient::with_timeout(&config.provider, timeout)?;
    let notifier = EmailNotifier::new(config.mail.clone());

    let target = MonitorTarget::new(args.symbol, args.sell_price, args.buy_price);
    let poll_interval = Duration::from_secs(config.settings.poll_interval_secs);
    let monitor = QuoteMonitor::new(client, notifier, target, poll_interval);

    // ctrl-c flips the token; the loop drains its current cycle and stops
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Recebido sinal de encerramento, finalizando...");
            signal_token.cancel();
        }
    });

    monitor.run(shutdown).await;

    Ok(())
}
