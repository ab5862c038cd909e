/// The bank account entity: balance validation, debit, credit and transfer.
pub mod account;

/// Demonstration scenario used by the binary: run a few operations on one
/// account and print the result as CSV.
pub mod demo;

pub use account::{Account, AccountError, AmountRule};
