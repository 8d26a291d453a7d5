//! Caller-facing ledger operations.
//!
//! [`DebtService`] wraps the core modules behind the five operations a
//! transport would expose, with fixed response shapes: successes carry a
//! `message` (plus `user_id` for registration) or a listing, business
//! rejections carry an `error` string. Infrastructure failures are *not*
//! flattened into rejection strings - they propagate as `Err` so a caller
//! can tell a retryable store outage from a deterministic rule violation.

use crate::{
    core::{account, debt, repayment},
    entities::{debt::Model as DebtModel, repayment::Model as RepaymentModel},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

/// Successful registration response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registered {
    /// Human-readable confirmation
    pub message: String,
    /// Identifier of the newly created account
    pub user_id: i64,
}

/// Generic confirmation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Human-readable confirmation
    pub message: String,
}

/// One user's ledger view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtList {
    /// Every debt in which the user is debtor or creditor, oldest first
    pub debts: Vec<DebtModel>,
}

/// One user's repayment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    /// Every repayment in which the user is debtor or creditor, oldest first
    pub transactions: Vec<RepaymentModel>,
}

/// A business-rule rejection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// Fixed machine-readable error string
    pub error: String,
}

/// Result of one ledger operation: either the success payload or a rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// The operation succeeded
    Ok(T),
    /// A business rule rejected the operation
    Rejected(Rejection),
}

/// Maps business-rule errors to their fixed rejection strings.
///
/// Infrastructure errors fall through unchanged.
fn business_rejection(err: Error) -> Result<Rejection> {
    let error = match &err {
        Error::DuplicateUser { .. } => "user exists",
        Error::UserNotFound { .. } => "user not found",
        Error::NoOutstandingDebt { .. } => "no outstanding debt",
        Error::InvalidAmount { .. } => "invalid amount",
        Error::SelfDebt { .. } => "cannot owe yourself",
        _ => return Err(err),
    };
    Ok(Rejection {
        error: error.to_string(),
    })
}

/// The debt ledger behind an explicit store handle.
///
/// Construct one per store; tests construct it over an in-memory `SQLite`
/// database.
pub struct DebtService {
    db: DatabaseConnection,
}

impl DebtService {
    /// Creates a service over an established database connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<Outcome<Registered>> {
        match account::register_account(&self.db, username, password, email).await {
            Ok(account) => Ok(Outcome::Ok(Registered {
                message: "Registration successful".to_string(),
                user_id: account.id,
            })),
            Err(err) => business_rejection(err).map(Outcome::Rejected),
        }
    }

    /// Records a debt owed by `debtor` to `creditor`.
    pub async fn record_debt(
        &self,
        debtor: &str,
        creditor: &str,
        amount: f64,
    ) -> Result<Outcome<Confirmation>> {
        match debt::record_debt(&self.db, debtor, creditor, amount).await {
            Ok(_) => Ok(Outcome::Ok(Confirmation {
                message: "Debt recorded".to_string(),
            })),
            Err(err) => business_rejection(err).map(Outcome::Rejected),
        }
    }

    /// Lists every debt in a user's ledger view.
    pub async fn list_debts(&self, username: &str) -> Result<Outcome<DebtList>> {
        match debt::list_debts_for_user(&self.db, username).await {
            Ok(debts) => Ok(Outcome::Ok(DebtList { debts })),
            Err(err) => business_rejection(err).map(Outcome::Rejected),
        }
    }

    /// Settles the oldest unpaid debt from `debtor` to `creditor`.
    pub async fn settle_debt(
        &self,
        debtor: &str,
        creditor: &str,
        amount: f64,
    ) -> Result<Outcome<Confirmation>> {
        match debt::settle_debt(&self.db, debtor, creditor, amount).await {
            Ok(_) => Ok(Outcome::Ok(Confirmation {
                message: "Repayment successful".to_string(),
            })),
            Err(err) => business_rejection(err).map(Outcome::Rejected),
        }
    }

    /// Lists every repayment involving a user.
    pub async fn list_transactions(&self, username: &str) -> Result<Outcome<TransactionList>> {
        match repayment::list_repayments_for_user(&self.db, username).await {
            Ok(transactions) => Ok(Outcome::Ok(TransactionList { transactions })),
            Err(err) => business_rejection(err).map(Outcome::Rejected),
        }
    }
}
