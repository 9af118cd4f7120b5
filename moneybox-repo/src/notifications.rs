//! Alert dispatch.
//!
//! [`QueuedNotifier`] is what the core talks to: it only pushes alerts onto
//! a channel. [`NotificationWorker`] drains that channel in the background
//! and delivers each alert to a webhook, or logs it when none is configured.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

use moneybox_types::{Alert, AlertKind, NotificationService, NotifyError};

use crate::security::{SIGNATURE_HEADER, sign_payload};

/// Notifier that queues alerts for the [`NotificationWorker`].
#[derive(Clone)]
pub struct QueuedNotifier {
    tx: mpsc::UnboundedSender<Alert>,
}

impl QueuedNotifier {
    /// Creates a notifier and the receiving end to hand to a worker.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn enqueue(&self, kind: AlertKind, address: &str) -> Result<(), NotifyError> {
        self.tx
            .send(Alert::new(kind, address))
            .map_err(|_| NotifyError::Closed)
    }
}

impl NotificationService for QueuedNotifier {
    fn notify_funds_low(&self, address: &str) -> Result<(), NotifyError> {
        self.enqueue(AlertKind::FundsLow, address)
    }

    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<(), NotifyError> {
        self.enqueue(AlertKind::ApproachingPayInLimit, address)
    }
}

/// Where alerts are POSTed, and the secret their bodies are signed with.
#[derive(Debug, Clone)]
pub struct WebhookTarget {
    pub url: String,
    pub secret: String,
}

pub struct NotificationWorker {
    alerts: mpsc::UnboundedReceiver<Alert>,
    client: reqwest::Client,
    target: Option<WebhookTarget>,
}

/// Upper bound on a single webhook delivery, connect included.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

impl NotificationWorker {
    pub fn new(
        alerts: mpsc::UnboundedReceiver<Alert>,
        target: Option<WebhookTarget>,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(alerts, target, DELIVERY_TIMEOUT)
    }

    /// Like [`NotificationWorker::new`], giving up on a delivery after `timeout`.
    pub fn with_timeout(
        alerts: mpsc::UnboundedReceiver<Alert>,
        target: Option<WebhookTarget>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            alerts,
            client,
            target,
        })
    }

    /// Delivers alerts until every [`QueuedNotifier`] has been dropped.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        match &self.target {
            Some(target) => info!("Starting alert worker sending to {}", target.url),
            None => info!("Starting alert worker without webhook, alerts are logged only"),
        }

        while let Some(alert) = self.alerts.recv().await {
            self.deliver(alert).await;
        }

        info!("Alert queue closed, worker stopping");
    }

    #[instrument(skip(self, alert), fields(alert_id = %alert.id, kind = %alert.kind))]
    async fn deliver(&self, alert: Alert) {
        let Some(target) = &self.target else {
            info!(address = %alert.address, "Alert raised");
            return;
        };

        let body = match serde_json::to_vec(&alert) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to encode alert: {}", e);
                return;
            }
        };
        let signature = sign_payload(&body, &target.secret);

        let result = self
            .client
            .post(&target.url)
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => info!("Alert delivered"),
            Ok(resp) => warn!("Alert rejected by webhook: HTTP {}", resp.status()),
            Err(e) => error!("Failed to deliver alert: {}", e),
        }
    }
}
