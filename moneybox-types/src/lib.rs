//! # Moneybox Types
//!
//! Domain types and port traits for the moneybox service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Account, User, Alert)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, Alert, AlertKind, DEFAULT_PAY_IN_LIMIT, LOW_FUNDS_THRESHOLD,
    PAY_IN_LIMIT_MARGIN, PayInLimit, User, UserId,
};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{AccountRepository, NotificationService, NotifyError};
