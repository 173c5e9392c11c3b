use std::time::Duration;

use reqwest::Client;
use tokio::sync::mpsc;

use crate::domain::events::OrderEvent;
use crate::domain::ports::ReplicationSink;

/// Upper bound on a single delivery attempt, replacing the transport
/// default of "forever".
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Spreadsheet web-app endpoint that receives order events.
    pub url: String,
}

/// Best-effort replication to the bookkeeping sheet. Events go onto an
/// in-memory channel and a background task delivers them, so the request
/// path never waits on the webhook. At-most-once: no retry, no persistence,
/// events in flight when the process dies are gone.
pub struct WebhookSink {
    tx: mpsc::UnboundedSender<OrderEvent>,
}

impl WebhookSink {
    /// Spawns the delivery task onto the current runtime.
    pub fn spawn(config: WebhookConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .expect("Failed to build webhook HTTP client");
        tokio::spawn(deliver_events(client, config, rx));
        Self { tx }
    }
}

impl ReplicationSink for WebhookSink {
    fn publish(&self, event: OrderEvent) {
        let action = event.action();
        if self.tx.send(event).is_err() {
            log::error!("replication worker is gone, dropping {action} event");
        }
    }
}

async fn deliver_events(
    client: Client,
    config: WebhookConfig,
    mut rx: mpsc::UnboundedReceiver<OrderEvent>,
) {
    while let Some(event) = rx.recv().await {
        let action = event.action();
        match client.post(&config.url).json(&event).send().await {
            Ok(resp) if resp.status().is_success() => {
                log::info!("{action} event replicated to sheet");
            }
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                log::error!("sheet rejected {action} event: status {status}, response {body}");
            }
            Err(e) => {
                log::error!("failed to deliver {action} event to sheet: {e}");
            }
        }
    }
}
