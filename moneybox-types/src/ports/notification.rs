//! Notification port.
//!
//! Alerts are fire-and-forget from the core's point of view. Implementations
//! should hand the alert off (queue, channel, outbox) rather than deliver it
//! inline, since the caller is in the middle of validating an operation.

/// Error type for notification dispatch.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification channel closed")]
    Closed,
}

/// Port trait for sending account alerts to an owner.
pub trait NotificationService: Send + Sync {
    /// The account balance will drop below the low-funds threshold.
    fn notify_funds_low(&self, address: &str) -> Result<(), NotifyError>;

    /// The account's cumulative pay-ins are close to the pay-in limit.
    fn notify_approaching_pay_in_limit(&self, address: &str) -> Result<(), NotifyError>;
}
