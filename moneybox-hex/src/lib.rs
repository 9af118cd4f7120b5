//! # Moneybox Hex
//!
//! Use cases, application service and HTTP adapter for the moneybox service.
//!
//! ## Architecture
//!
//! - `features/` - Use cases (withdraw money, transfer money)
//! - `service/` - Application service (request validation, composes the use cases)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! Everything is generic over `R: AccountRepository` and
//! `N: NotificationService`, allowing different adapters to be injected.

pub mod features;
pub mod inbound;
pub mod openapi;
pub mod service;


pub use features::{TransferMoney, TransferOutcome, WithdrawMoney};
pub use service::MoneyboxService;
