//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use rust_decimal::Decimal;

use moneybox_repo::WebhookTarget;
use moneybox_types::PayInLimit;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub pay_in_limit: PayInLimit,
    pub seed_file: Option<PathBuf>,
    pub notify_webhook_url: Option<String>,
    pub notify_webhook_secret: String,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a port number")?;

        let pay_in_limit = match var("MONEYBOX_PAY_IN_LIMIT") {
            Some(raw) => {
                let limit = raw
                    .parse::<Decimal>()
                    .with_context(|| format!("MONEYBOX_PAY_IN_LIMIT is not a number: {raw}"))?;
                PayInLimit::new(limit)?
            }
            None => PayInLimit::default(),
        };

        Ok(Self {
            port,
            pay_in_limit,
            seed_file: var("MONEYBOX_SEED_FILE").map(PathBuf::from),
            notify_webhook_url: var("MONEYBOX_NOTIFY_WEBHOOK_URL").filter(|u| !u.is_empty()),
            notify_webhook_secret: var("MONEYBOX_NOTIFY_WEBHOOK_SECRET").unwrap_or_default(),
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty()),
        })
    }

    /// Webhook alerts are delivered to, if one is configured.
    pub fn webhook_target(&self) -> Option<WebhookTarget> {
        self.notify_webhook_url.as_ref().map(|url| WebhookTarget {
            url: url.clone(),
            secret: self.notify_webhook_secret.clone(),
        })
    }
}
