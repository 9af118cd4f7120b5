//! Use cases.
//!
//! Each use case loads fresh account state, lets the accounts validate and
//! apply the change, and hands the result back to the repository.

mod transfer_money;
mod withdraw_money;

pub use transfer_money::{TransferMoney, TransferOutcome};
pub use withdraw_money::WithdrawMoney;
