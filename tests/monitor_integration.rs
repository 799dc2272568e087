//! End-to-end tests for the poll-evaluate-notify loop
//!
//! These drive a real `AlphaVantageClient` against a wiremock server and
//! capture notifications with a recording sink, so a whole cycle runs
//! exactly as in production minus the outbound SMTP hop.

mod common;

use std::time::Duration;

use rust_decimal_macros::dec;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{global_quote_body, provider_config, RecordingSink};
use stock_quote_alert::alphavantage::client::AlphaVantageClient;
use stock_quote_alert::common::types::{AlertEvent, MonitorTarget};
use stock_quote_alert::config::loader::load_config;
use stock_quote_alert::monitor::QuoteMonitor;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn petr4_target() -> MonitorTarget {
    MonitorTarget::new("PETR4", dec!(30.00), dec!(25.00))
}

/// Run the monitor against the given server for roughly `cycles` cycles
async fn run_monitor_against(server: &MockServer, timeout: Duration, cycles: u32) -> Vec<AlertEvent> {
    let client = AlphaVantageClient::with_timeout(&provider_config(&server.uri()), timeout).unwrap();
    let sink = RecordingSink::default();
    let monitor = QuoteMonitor::new(client, sink.clone(), petr4_target(), POLL_INTERVAL);

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    let handle = tokio::spawn(async move { monitor.run(token).await });

    tokio::time::sleep(POLL_INTERVAL * (cycles + 1) + Duration::from_millis(50)).await;
    shutdown.cancel();
    handle.await.unwrap();

    sink.alerts()
}

#[test_log::test(tokio::test)]
async fn test_sell_alert_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(global_quote_body("PETR4.SA", "31.50"), "application/json"),
        )
        .mount(&server)
        .await;

    let alerts = run_monitor_against(&server, Duration::from_secs(5), 2).await;

    assert!(!alerts.is_empty(), "sell threshold crossed, expected alerts");
    assert_eq!(alerts[0].symbol, "PETR4");
    assert_eq!(alerts[0].price, dec!(31.50));
    assert_eq!(alerts[0].reason, "subiu acima do preço de VENDA");
}

#[test_log::test(tokio::test)]
async fn test_in_band_price_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(global_quote_body("PETR4.SA", "27.00"), "application/json"),
        )
        .mount(&server)
        .await;

    let alerts = run_monitor_against(&server, Duration::from_secs(5), 2).await;

    assert!(alerts.is_empty(), "27.00 is between the thresholds");
}

#[test_log::test(tokio::test)]
async fn test_timed_out_fetch_never_buy_alerts() {
    // the buy threshold is 25.00; a timeout must not masquerade as a
    // price below it
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(global_quote_body("PETR4.SA", "31.50"), "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let alerts = run_monitor_against(&server, Duration::from_millis(30), 3).await;

    assert!(alerts.is_empty(), "a failed fetch must never alert");
}

#[test_log::test(tokio::test)]
async fn test_buy_alert_refires_while_condition_holds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(global_quote_body("PETR4.SA", "24.00"), "application/json"),
        )
        .mount(&server)
        .await;

    let alerts = run_monitor_against(&server, Duration::from_secs(5), 5).await;

    assert!(
        alerts.len() >= 2,
        "no suppression: each cycle below the buy threshold re-alerts (got {})",
        alerts.len()
    );
    assert!(alerts
        .iter()
        .all(|a| a.reason == "caiu abaixo do preço de COMPRA"));
}

#[test_log::test(tokio::test)]
async fn test_loop_survives_provider_outage() {
    let server = MockServer::start().await;
    // first response breaks, later ones recover
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("outage"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(global_quote_body("PETR4.SA", "31.50"), "application/json"),
        )
        .mount(&server)
        .await;

    let alerts = run_monitor_against(&server, Duration::from_secs(5), 4).await;

    assert!(
        !alerts.is_empty(),
        "loop must keep polling past a failed cycle"
    );
    assert_eq!(alerts[0].reason, "subiu acima do preço de VENDA");
}

#[tokio::test]
async fn test_absent_settings_file_fails_before_any_network_call() {
    let server = MockServer::start().await;
    // zero expected requests: startup must die before the loop begins
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = load_config("/nonexistent/appsettings.json");
    assert!(result.is_err());
}
