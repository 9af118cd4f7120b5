use std::sync::Arc;

use rust_decimal::Decimal;

use moneybox_types::{Account, AccountId, AccountRepository, AppError, NotificationService};

/// Takes money out of a single account.
pub struct WithdrawMoney<R: AccountRepository, N: NotificationService> {
    repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R: AccountRepository, N: NotificationService> WithdrawMoney<R, N> {
    pub fn new(repo: Arc<R>, notifier: Arc<N>) -> Self {
        Self { repo, notifier }
    }

    /// Withdraws `amount` from the account and persists it.
    ///
    /// On any failure the account is not written back.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, account_id: AccountId, amount: Decimal) -> Result<Account, AppError> {
        let mut account = self.repo.get_by_id(account_id).await?;

        account.validate_withdrawal(self.notifier.as_ref(), amount)?;
        account.apply_withdrawal(amount);

        self.repo.update(&account).await?;

        tracing::info!(balance = %account.balance(), "withdrawal applied");
        Ok(account)
    }
}
