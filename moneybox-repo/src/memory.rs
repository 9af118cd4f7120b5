//! In-process account storage.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use moneybox_types::{Account, AccountId, AccountRepository, PayInLimit, RepoError, User};

/// Stored shape of an account.
///
/// The pay-in limit is deployment configuration, not account data, so it is
/// attached when the record is turned back into an [`Account`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub owner: User,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub withdrawn: Decimal,
    #[serde(default)]
    pub paid_in: Decimal,
}

impl AccountRecord {
    /// Converts the stored record into a domain Account.
    pub fn into_domain(self, pay_in_limit: PayInLimit) -> Account {
        Account::from_parts(
            self.id,
            self.owner,
            self.balance,
            self.withdrawn,
            self.paid_in,
            pay_in_limit,
        )
    }
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            owner: account.owner.clone(),
            balance: account.balance(),
            withdrawn: account.withdrawn(),
            paid_in: account.paid_in(),
        }
    }
}

/// Account repository backed by a concurrent map.
pub struct InMemoryAccountRepo {
    accounts: DashMap<AccountId, AccountRecord>,
    pay_in_limit: PayInLimit,
}

impl InMemoryAccountRepo {
    /// Creates an empty repository.
    pub fn new(pay_in_limit: PayInLimit) -> Self {
        Self {
            accounts: DashMap::new(),
            pay_in_limit,
        }
    }

    /// Creates a repository holding `records`.
    pub fn with_records(
        pay_in_limit: PayInLimit,
        records: impl IntoIterator<Item = AccountRecord>,
    ) -> Self {
        let repo = Self::new(pay_in_limit);
        for record in records {
            repo.insert(record);
        }
        repo
    }

    /// Loads a repository from a JSON array of account records.
    pub async fn from_seed_file(path: &Path, pay_in_limit: PayInLimit) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let records: Vec<AccountRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid seed file {}", path.display()))?;

        tracing::info!(accounts = records.len(), path = %path.display(), "seeded account store");
        Ok(Self::with_records(pay_in_limit, records))
    }

    /// Stores a record, replacing any account with the same ID.
    pub fn insert(&self, record: AccountRecord) {
        self.accounts.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn get_by_id(&self, id: AccountId) -> Result<Account, RepoError> {
        self.accounts
            .get(&id)
            .map(|entry| entry.value().clone().into_domain(self.pay_in_limit))
            .ok_or(RepoError::NotFound(id))
    }

    async fn update(&self, account: &Account) -> Result<(), RepoError> {
        match self.accounts.get_mut(&account.id) {
            Some(mut entry) => {
                *entry = AccountRecord::from(account);
                Ok(())
            }
            None => Err(RepoError::NotFound(account.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;

    use super::*;

    fn record(balance: Decimal, paid_in: Decimal) -> AccountRecord {
        AccountRecord {
            id: AccountId::new(),
            owner: User::new("Alice", "alice@example.com"),
            balance,
            withdrawn: Decimal::ZERO,
            paid_in,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_attaches_pay_in_limit() {
        let limit = PayInLimit::new(dec!(2500)).unwrap();
        let stored = record(dec!(100), dec!(50));
        let repo = InMemoryAccountRepo::with_records(limit, [stored.clone()]);

        let account = repo.get_by_id(stored.id).await.unwrap();

        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.paid_in(), dec!(50));
        assert_eq!(account.pay_in_limit(), limit);
        assert_eq!(account.owner, stored.owner);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let repo = InMemoryAccountRepo::new(PayInLimit::default());

        let result = repo.get_by_id(AccountId::new()).await;

        assert!(matches!(result, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_stored_totals() {
        let stored = record(dec!(600), Decimal::ZERO);
        let repo = InMemoryAccountRepo::with_records(PayInLimit::default(), [stored.clone()]);

        let mut account = repo.get_by_id(stored.id).await.unwrap();
        account.apply_withdrawal(dec!(10));
        repo.update(&account).await.unwrap();

        let reloaded = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(reloaded.balance(), dec!(590));
        assert_eq!(reloaded.withdrawn(), dec!(-10));
    }

    #[tokio::test]
    async fn test_loaded_accounts_are_independent_copies() {
        let stored = record(dec!(600), Decimal::ZERO);
        let repo = InMemoryAccountRepo::with_records(PayInLimit::default(), [stored.clone()]);

        let mut account = repo.get_by_id(stored.id).await.unwrap();
        account.apply_deposit(dec!(10));

        let reloaded = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(reloaded.balance(), dec!(600));
    }

    #[tokio::test]
    async fn test_update_unknown_account_fails() {
        let repo = InMemoryAccountRepo::new(PayInLimit::default());
        let account = record(Decimal::ZERO, Decimal::ZERO).into_domain(PayInLimit::default());

        let result = repo.update(&account).await;

        assert!(matches!(result, Err(RepoError::NotFound(id)) if id == account.id));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_from_seed_file() {
        let id = AccountId::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "{id}",
                "owner": {{
                    "id": "6f1c1a8e-5b7a-4a52-9d55-0f0b6c1f2a11",
                    "name": "Alice",
                    "email": "alice@example.com"
                }},
                "balance": "700.00",
                "paid_in": "3600"
            }}]"#
        )
        .unwrap();

        let repo = InMemoryAccountRepo::from_seed_file(file.path(), PayInLimit::default())
            .await
            .unwrap();

        assert_eq!(repo.len(), 1);
        let account = repo.get_by_id(id).await.unwrap();
        assert_eq!(account.balance(), dec!(700));
        assert_eq!(account.withdrawn(), Decimal::ZERO);
        assert_eq!(account.paid_in(), dec!(3600));
        assert_eq!(account.owner.notification_address(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_from_seed_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = InMemoryAccountRepo::from_seed_file(file.path(), PayInLimit::default()).await;

        assert!(result.is_err());
    }
}
