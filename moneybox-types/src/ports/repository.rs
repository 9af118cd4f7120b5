//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (in-memory, database-backed) implement this trait.

use crate::domain::{Account, AccountId};
use crate::error::RepoError;

/// Account lookup and persistence.
///
/// Accounts are loaded fresh for every operation and handed back once
/// mutated. The core never caches an `Account` between calls.
///
/// No transaction spans two `update` calls. A transfer persists its two
/// legs independently, so an adapter failing the second write leaves the
/// first one committed.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Loads an account. Returns `RepoError::NotFound` if it does not exist.
    async fn get_by_id(&self, id: AccountId) -> Result<Account, RepoError>;

    /// Persists the current state of an account.
    async fn update(&self, account: &Account) -> Result<(), RepoError>;
}
