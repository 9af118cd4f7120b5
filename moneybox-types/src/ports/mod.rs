//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod notification;
mod repository;

pub use notification::{NotificationService, NotifyError};
pub use repository::AccountRepository;
