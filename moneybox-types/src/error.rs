//! Error types for the moneybox service.

use rust_decimal::Decimal;

use crate::domain::AccountId;

/// Domain-level errors (business rule violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Pay in limit exceeded: paid in {paid_in}, requested {requested}, limit {limit}")]
    PayInLimitExceeded {
        paid_in: Decimal,
        requested: Decimal,
        limit: Decimal,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Pay in limit exceeded: paid in {paid_in}, requested {requested}, limit {limit}")]
    PayInLimitExceeded {
        paid_in: Decimal,
        requested: Decimal,
        limit: Decimal,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InsufficientFunds { balance, requested } => {
                AppError::InsufficientFunds { balance, requested }
            }
            DomainError::PayInLimitExceeded {
                paid_in,
                requested,
                limit,
            } => AppError::PayInLimitExceeded {
                paid_in,
                requested,
                limit,
            },
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::NotFound(format!("Account not found: {}", id)),
            RepoError::Storage(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_domain_errors_keep_their_kind() {
        let err: AppError = DomainError::InsufficientFunds {
            balance: dec!(-1),
            requested: dec!(10),
        }
        .into();
        assert!(matches!(err, AppError::InsufficientFunds { .. }));

        let err: AppError = DomainError::PayInLimitExceeded {
            paid_in: dec!(5000),
            requested: dec!(10),
            limit: dec!(4000),
        }
        .into();
        assert!(matches!(err, AppError::PayInLimitExceeded { .. }));
    }

    #[test]
    fn test_missing_account_maps_to_not_found() {
        let id = AccountId::new();
        let err: AppError = RepoError::NotFound(id).into();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains(&id.to_string())),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
