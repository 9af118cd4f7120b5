//! Property tests for the account validation and mutation rules.
//!
//! Amounts are generated in cents; the default pay-in limit (4000) and the
//! 500 thresholds apply throughout.

use std::sync::Mutex;

use moneybox_types::{
    Account, AccountId, AlertKind, DomainError, NotificationService, NotifyError, PayInLimit,
    User,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<AlertKind>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<AlertKind> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationService for RecordingNotifier {
    fn notify_funds_low(&self, _address: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(AlertKind::FundsLow);
        Ok(())
    }

    fn notify_approaching_pay_in_limit(&self, _address: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(AlertKind::ApproachingPayInLimit);
        Ok(())
    }
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn account(balance: Decimal, withdrawn: Decimal, paid_in: Decimal) -> Account {
    Account::from_parts(
        AccountId::new(),
        User::new("Alice", "alice@example.com"),
        balance,
        withdrawn,
        paid_in,
        PayInLimit::default(),
    )
}

proptest! {
    #[test]
    fn test_withdrawal_leaving_threshold_or_more_is_quiet(
        amount in 1..=1_000_000i64,
        remaining in 50_000..=10_000_000i64,
        withdrawn in -10_000_000..=0i64,
        paid_in in 0..=400_000i64,
    ) {
        let notifier = RecordingNotifier::default();
        let mut account = account(cents(amount + remaining), cents(withdrawn), cents(paid_in));

        prop_assert!(account.validate_withdrawal(&notifier, cents(amount)).is_ok());
        account.apply_withdrawal(cents(amount));

        prop_assert_eq!(account.balance(), cents(remaining));
        prop_assert_eq!(account.withdrawn(), cents(withdrawn - amount));
        prop_assert_eq!(account.paid_in(), cents(paid_in));
        prop_assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_withdrawal_leaving_under_threshold_alerts_once(
        amount in 1..=1_000_000i64,
        remaining in 0..50_000i64,
    ) {
        let notifier = RecordingNotifier::default();
        let account = account(cents(amount + remaining), Decimal::ZERO, Decimal::ZERO);

        prop_assert!(account.validate_withdrawal(&notifier, cents(amount)).is_ok());

        prop_assert_eq!(notifier.sent(), vec![AlertKind::FundsLow]);
    }

    #[test]
    fn test_withdrawal_over_balance_changes_nothing(
        balance in -1_000_000..=1_000_000i64,
        over in 1..=1_000_000i64,
        withdrawn in -10_000_000..=0i64,
    ) {
        let notifier = RecordingNotifier::default();
        let account = account(cents(balance), cents(withdrawn), Decimal::ZERO);
        let before = account.clone();

        let result = account.validate_withdrawal(&notifier, cents(balance + over));

        let is_insufficient = matches!(result, Err(DomainError::InsufficientFunds { .. }));
        prop_assert!(is_insufficient);
        prop_assert_eq!(account, before);
        prop_assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_deposit_over_limit_changes_nothing(
        paid_in in 0..=500_000i64,
        over in 1..=1_000_000i64,
        balance in -1_000_000..=1_000_000i64,
    ) {
        let notifier = RecordingNotifier::default();
        let account = account(cents(balance), Decimal::ZERO, cents(paid_in));
        let before = account.clone();
        let amount = 400_000 - paid_in + over;

        let result = account.validate_deposit(&notifier, cents(amount));

        let is_exceeded = matches!(result, Err(DomainError::PayInLimitExceeded { .. }));
        prop_assert!(is_exceeded);
        prop_assert_eq!(account, before);
        prop_assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_deposit_leaving_under_margin_alerts_once(
        amount in 1..=350_000i64,
        headroom in 0..50_000i64,
        balance in 0..=1_000_000i64,
    ) {
        let notifier = RecordingNotifier::default();
        let paid_in = 400_000 - headroom - amount;
        let mut account = account(cents(balance), Decimal::ZERO, cents(paid_in));

        prop_assert!(account.validate_deposit(&notifier, cents(amount)).is_ok());
        account.apply_deposit(cents(amount));

        prop_assert_eq!(notifier.sent(), vec![AlertKind::ApproachingPayInLimit]);
        prop_assert_eq!(account.paid_in(), cents(400_000 - headroom));
        prop_assert_eq!(account.balance(), cents(balance + amount));
    }
}
