//! Moneybox Application Service
//!
//! Validates incoming requests and dispatches them to the use cases.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use rust_decimal::Decimal;

use moneybox_types::{
    Account, AccountId, AccountRepository, AppError, NotificationService, TransferRequest,
    WithdrawRequest,
};

use crate::features::{TransferMoney, TransferOutcome, WithdrawMoney};

/// Application service for money movement.
///
/// Generic over the repository and notification adapters, which are
/// injected at compile time. This enables:
/// - Swapping adapters without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
pub struct MoneyboxService<R: AccountRepository, N: NotificationService> {
    repo: Arc<R>,
    notifier: Arc<N>,
    withdraw_money: WithdrawMoney<R, N>,
    transfer_money: TransferMoney<R, N>,
}

impl<R: AccountRepository, N: NotificationService> MoneyboxService<R, N> {
    /// Creates a new service over the given adapters.
    pub fn new(repo: R, notifier: N) -> Self {
        let repo = Arc::new(repo);
        let notifier = Arc::new(notifier);
        Self {
            withdraw_money: WithdrawMoney::new(repo.clone(), notifier.clone()),
            transfer_money: TransferMoney::new(repo.clone(), notifier.clone()),
            repo,
            notifier,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Gets an account by ID.
    pub async fn get_account(&self, id: AccountId) -> Result<Account, AppError> {
        self.repo.get_by_id(id).await.map_err(Into::into)
    }

    /// Withdraws money from an account.
    pub async fn withdraw(&self, req: WithdrawRequest) -> Result<Account, AppError> {
        ensure_positive(req.amount)?;

        self.withdraw_money.execute(req.account_id, req.amount).await
    }

    /// Transfers money between accounts.
    pub async fn transfer(&self, req: TransferRequest) -> Result<TransferOutcome, AppError> {
        ensure_positive(req.amount)?;

        // Both legs would load the same record and the second write would
        // clobber the first.
        if req.from_account_id == req.to_account_id {
            return Err(AppError::BadRequest(
                "Cannot transfer to the same account".into(),
            ));
        }

        self.transfer_money
            .execute(req.from_account_id, req.to_account_id, req.amount)
            .await
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::BadRequest("Amount must be positive".into()));
    }
    Ok(())
}
