use std::sync::Arc;

use rust_decimal::Decimal;

use moneybox_types::{Account, AccountId, AccountRepository, AppError, NotificationService};

/// Both accounts as persisted by a successful transfer.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub from: Account,
    pub to: Account,
}

/// Moves money from one account to another.
pub struct TransferMoney<R: AccountRepository, N: NotificationService> {
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R: AccountRepository, N: NotificationService> TransferMoney<R, N> {
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    /// Transfers `amount` from `from_account_id` to `to_account_id`.
    ///
    /// Both legs are validated before either account is touched, withdrawal
    /// leg first, so a transfer failing both checks reports insufficient
    /// funds. A funds-low alert raised by the withdrawal leg is not taken
    /// back if the deposit leg then fails.
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<TransferOutcome, AppError> {
        let mut from = self.repo.get_by_id(from_account_id).await?;
        let mut to = self.repo.get_by_id(to_account_id).await?;

        from.validate_withdrawal(self.notifier.as_ref(), amount)?;
        to.validate_deposit(self.notifier.as_ref(), amount)?;

        from.apply_withdrawal(amount);
        to.apply_deposit(amount);

        // Not atomic: a failure here leaves the source leg persisted.
        self.repo.update(&from).await?;
        self.repo.update(&to).await?;

        tracing::info!(
            from_balance = %from.balance(),
            to_balance = %to.balance(),
            "transfer applied"
        );
        Ok(TransferOutcome { from, to })
    }
}
