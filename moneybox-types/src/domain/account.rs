//! Account domain model.
//!
//! The account owns the bookkeeping rules for its three running totals.
//! Validation and mutation are separate steps so that a caller moving money
//! between two accounts can check both legs before touching either one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user::User;
use crate::error::DomainError;
use crate::ports::NotificationService;

/// A withdrawal leaving less than this in the account warns the owner.
pub const LOW_FUNDS_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// A pay-in leaving less headroom than this under the limit warns the owner.
pub const PAY_IN_LIMIT_MARGIN: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Pay-in ceiling used when a deployment does not configure one.
pub const DEFAULT_PAY_IN_LIMIT: Decimal = Decimal::from_parts(4000, 0, 0, false, 0);

/// Unique identifier for an Account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random AccountId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Ceiling on the cumulative amount paid into an account.
///
/// One value is shared by every account of a deployment and handed to each
/// account as it is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayInLimit(Decimal);

impl PayInLimit {
    /// Creates a pay-in limit.
    ///
    /// # Validation
    /// - Limit must be strictly positive
    pub fn new(limit: Decimal) -> Result<Self, DomainError> {
        if limit <= Decimal::ZERO {
            return Err(DomainError::ValidationError(
                "Pay in limit must be positive".into(),
            ));
        }
        Ok(Self(limit))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Default for PayInLimit {
    fn default() -> Self {
        Self(DEFAULT_PAY_IN_LIMIT)
    }
}

impl std::fmt::Display for PayInLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer account.
///
/// `withdrawn` is a running negative offset: every withdrawal of `x` lowers
/// it by `x`. `paid_in` only grows and never passes the pay-in limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub owner: User,
    balance: Decimal,
    withdrawn: Decimal,
    paid_in: Decimal,
    pay_in_limit: PayInLimit,
}

impl Account {
    /// Creates an empty account for `owner`.
    pub fn new(owner: User, pay_in_limit: PayInLimit) -> Self {
        Self {
            id: AccountId::new(),
            owner,
            balance: Decimal::ZERO,
            withdrawn: Decimal::ZERO,
            paid_in: Decimal::ZERO,
            pay_in_limit,
        }
    }

    /// Creates an account with all fields specified (for storage reconstruction).
    ///
    /// The totals are taken as stored, even if they already break the rules
    /// enforced by the `validate_*` methods.
    pub fn from_parts(
        id: AccountId,
        owner: User,
        balance: Decimal,
        withdrawn: Decimal,
        paid_in: Decimal,
        pay_in_limit: PayInLimit,
    ) -> Self {
        Self {
            id,
            owner,
            balance,
            withdrawn,
            paid_in,
            pay_in_limit,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawn(&self) -> Decimal {
        self.withdrawn
    }

    pub fn paid_in(&self) -> Decimal {
        self.paid_in
    }

    pub fn pay_in_limit(&self) -> PayInLimit {
        self.pay_in_limit
    }

    /// Checks that `amount` can be taken out of this account.
    ///
    /// Fails with `InsufficientFunds` when the balance would go negative; no
    /// alert is sent in that case. Otherwise, if the remaining balance would
    /// be under [`LOW_FUNDS_THRESHOLD`], the owner is sent a funds-low alert.
    pub fn validate_withdrawal(
        &self,
        notifier: &dyn NotificationService,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        let insufficient = || DomainError::InsufficientFunds {
            balance: self.balance,
            requested: amount,
        };

        let projected = self.balance.checked_sub(amount).ok_or_else(insufficient)?;
        if projected < Decimal::ZERO {
            return Err(insufficient());
        }
        self.withdrawn
            .checked_sub(amount)
            .ok_or_else(|| out_of_range("withdrawn"))?;

        if projected < LOW_FUNDS_THRESHOLD {
            let address = self.owner.notification_address();
            if let Err(e) = notifier.notify_funds_low(address) {
                tracing::warn!(account_id = %self.id, error = %e, "funds low alert not dispatched");
            }
        }

        Ok(())
    }

    /// Checks that `amount` can be paid into this account.
    ///
    /// Fails with `PayInLimitExceeded` when cumulative pay-ins would pass the
    /// limit; no alert is sent in that case. Otherwise, if the headroom left
    /// would be under [`PAY_IN_LIMIT_MARGIN`], the owner is sent an alert.
    pub fn validate_deposit(
        &self,
        notifier: &dyn NotificationService,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        let limit = self.pay_in_limit.amount();
        let exceeded = || DomainError::PayInLimitExceeded {
            paid_in: self.paid_in,
            requested: amount,
            limit,
        };

        let projected = self.paid_in.checked_add(amount).ok_or_else(exceeded)?;
        if projected > limit {
            return Err(exceeded());
        }
        self.balance
            .checked_add(amount)
            .ok_or_else(|| out_of_range("balance"))?;

        // No difference means the headroom is beyond what a Decimal holds.
        let near_limit = limit
            .checked_sub(projected)
            .is_some_and(|headroom| headroom < PAY_IN_LIMIT_MARGIN);
        if near_limit {
            let address = self.owner.notification_address();
            if let Err(e) = notifier.notify_approaching_pay_in_limit(address) {
                tracing::warn!(account_id = %self.id, error = %e, "pay in limit alert not dispatched");
            }
        }

        Ok(())
    }

    /// Takes `amount` out. Call only after `validate_withdrawal` succeeded.
    pub fn apply_withdrawal(&mut self, amount: Decimal) {
        self.balance -= amount;
        self.withdrawn -= amount;
    }

    /// Pays `amount` in. Call only after `validate_deposit` succeeded.
    pub fn apply_deposit(&mut self, amount: Decimal) {
        self.balance += amount;
        self.paid_in += amount;
    }
}

fn out_of_range(total: &str) -> DomainError {
    DomainError::ValidationError(format!("{total} total out of range"))
}
