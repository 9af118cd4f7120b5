//! Domain models for the moneybox service.

pub mod account;
pub mod alert;
pub mod user;

pub use account::{
    Account, AccountId, DEFAULT_PAY_IN_LIMIT, LOW_FUNDS_THRESHOLD, PAY_IN_LIMIT_MARGIN, PayInLimit,
};
pub use alert::{Alert, AlertKind};
pub use user::{User, UserId};
