//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Amounts travel as decimal strings (`"10.50"`) so no precision is lost
//! between client and server.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountId};

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Current state of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: AccountId,
    /// Address alerts for this account are sent to
    #[schema(example = "alice@example.com")]
    pub owner_email: String,
    #[schema(value_type = String, example = "590.00")]
    pub balance: Decimal,
    /// Running total of withdrawals, as a negative offset
    #[schema(value_type = String, example = "-10.00")]
    pub withdrawn: Decimal,
    /// Cumulative amount paid in
    #[schema(value_type = String, example = "3610.00")]
    pub paid_in: Decimal,
    #[schema(value_type = String, example = "4000")]
    pub pay_in_limit: Decimal,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            owner_email: account.owner.notification_address().to_string(),
            balance: account.balance(),
            withdrawn: account.withdrawn(),
            paid_in: account.paid_in(),
            pay_in_limit: account.pay_in_limit().amount(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Money movement DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to withdraw money from an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WithdrawRequest {
    /// Source account ID
    pub account_id: AccountId,
    /// Amount to withdraw
    #[schema(value_type = String, example = "10.00")]
    pub amount: Decimal,
}

/// Request to transfer money between accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Source account ID
    pub from_account_id: AccountId,
    /// Destination account ID
    pub to_account_id: AccountId,
    /// Amount to transfer
    #[schema(value_type = String, example = "10.00")]
    pub amount: Decimal,
}

/// Both accounts after a successful transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    pub from: AccountResponse,
    pub to: AccountResponse,
}
