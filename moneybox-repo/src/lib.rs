//! # Moneybox Repository
//!
//! Concrete outbound adapters for the moneybox service:
//! - `memory` - account storage implementing the `AccountRepository` port
//! - `notifications` - queued alert dispatch implementing `NotificationService`,
//!   plus the worker that delivers queued alerts
//! - `security` - webhook payload signing

use std::path::Path;

use moneybox_types::PayInLimit;

pub mod memory;
pub mod notifications;
pub mod security;

pub use memory::{AccountRecord, InMemoryAccountRepo};
pub use notifications::{NotificationWorker, QueuedNotifier, WebhookTarget};

/// Build and initialize the account repository.
///
/// Accounts are provisioned elsewhere; a seed file (a JSON array of
/// [`AccountRecord`]) is the only way to load them here.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo(PayInLimit::default(), Some(Path::new("accounts.json"))).await?;
/// ```
pub async fn build_repo(
    pay_in_limit: PayInLimit,
    seed_file: Option<&Path>,
) -> anyhow::Result<InMemoryAccountRepo> {
    match seed_file {
        Some(path) => InMemoryAccountRepo::from_seed_file(path, pay_in_limit).await,
        None => Ok(InMemoryAccountRepo::new(pay_in_limit)),
    }
}
