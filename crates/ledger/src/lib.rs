//! Ledger module (savings and checking accounts).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod money;

pub use account::{
    Account, AccountKind, AccountSnapshot, CheckingTerms, OpenAccount, SavingsTerms,
    DEFAULT_INTEREST_RATE, DEFAULT_MONTHLY_FEE, DEFAULT_OVERDRAFT_LIMIT,
};
pub use money::{Amount, format_amount};
