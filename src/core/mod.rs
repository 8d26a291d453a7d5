//! Core business logic - framework-agnostic ledger operations.
//! Each submodule owns the records it writes: `account` is the only writer
//! of accounts, `debt` and `repayment` the only writers of the ledger.

/// User directory: registration and lookups
pub mod account;
/// Debt ledger engine: recording, listing, and settling obligations
pub mod debt;
/// Password hashing primitive behind the user directory
pub mod password;
/// Append-only repayment log
pub mod repayment;
