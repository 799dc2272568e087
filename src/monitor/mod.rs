//! Monitor module - the fetch → evaluate → notify loop

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::alert::evaluator;
use crate::common::traits::{AlertSink, QuoteSource};
use crate::common::types::{AlertEvent, MonitorTarget, QuoteObservation};

/// Drives the poll cycle for a single instrument at a fixed cadence
///
/// Each cycle is strictly sequential: fetch, evaluate, optionally notify,
/// then sleep the full interval. The sleep starts after the work, so the
/// wall-clock period is work latency plus the interval, not a fixed tick.
pub struct QuoteMonitor<S, N> {
    source: S,
    sink: N,
    target: MonitorTarget,
    poll_interval: Duration,
}

impl<S, N> QuoteMonitor<S, N>
where
    S: QuoteSource,
    N: AlertSink,
{
    pub fn new(source: S, sink: N, target: MonitorTarget, poll_interval: Duration) -> Self {
        Self {
            source,
            sink,
            target,
            poll_interval,
        }
    }

    /// Run cycles until the token is cancelled
    ///
    /// Nothing inside a cycle terminates the loop: fetch and notification
    /// failures are logged and the next cycle proceeds. Cancellation is
    /// honored at the top of each cycle and during the inter-cycle sleep.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!(
            "Monitorando ativo {} (venda: {}, compra: {}) via {}",
            self.target.symbol,
            self.target.sell_price,
            self.target.buy_price,
            self.source.provider_name()
        );

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            self.run_cycle().await;

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        info!("Monitoramento de {} encerrado", self.target.symbol);
    }

    /// One fetch → evaluate → notify pass
    async fn run_cycle(&self) {
        let price = match self.source.latest_price(&self.target.symbol).await {
            Ok(price) => price,
            Err(e) => {
                // a failed fetch never reaches the evaluator, so it cannot
                // misfire a buy alert
                warn!("Erro ao consultar API: {}", e);
                return;
            }
        };

        let observation = QuoteObservation::now(self.target.symbol.clone(), price);
        info!("{} = {}", observation.symbol, observation.price);

        let decision = evaluator::evaluate(
            observation.price,
            self.target.sell_price,
            self.target.buy_price,
        );

        if let Some(reason) = decision.reason() {
            let alert = AlertEvent {
                symbol: observation.symbol,
                price: observation.price,
                reason,
            };
            if !self.sink.notify(&alert).await {
                warn!("Alerta de {} descartado nesta iteração", alert.symbol);
            }
        }
    }
}
