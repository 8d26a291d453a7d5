//! Unified error type for the debt ledger.
//!
//! Business-rule violations (duplicate user, unknown user, nothing left to
//! settle) and infrastructure failures (database, I/O) share one enum but are
//! distinguishable through [`Error::is_retryable`], so callers can retry the
//! latter without ever retrying the former.

use thiserror::Error;

/// All errors produced by the ledger.
#[derive(Debug, Error)]
pub enum Error {
    /// A registration attempt reused an existing username.
    #[error("user '{username}' already exists")]
    DuplicateUser {
        /// The username that was already taken
        username: String,
    },

    /// An operation referenced a username that was never registered.
    #[error("user '{username}' not found")]
    UserNotFound {
        /// The unknown username
        username: String,
    },

    /// A settlement found no unpaid debt for the given pair.
    #[error("no outstanding debt from '{debtor}' to '{creditor}'")]
    NoOutstandingDebt {
        /// The paying party
        debtor: String,
        /// The party being repaid
        creditor: String,
    },

    /// An amount was zero, negative, or not a finite number.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A debt named the same user as both debtor and creditor.
    #[error("'{username}' cannot owe themselves")]
    SelfDebt {
        /// The user appearing on both sides
        username: String,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Password hashing or verification failed.
    #[error("password hash error: {message}")]
    PasswordHash {
        /// Description from the hashing primitive
        message: String,
    },

    /// The underlying store failed.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error outside the store (e.g. reading config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether retrying the failed operation could succeed.
    ///
    /// Infrastructure failures are transient; business-rule violations are
    /// deterministic and retrying them only repeats the rejection.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Io(_))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_errors_are_not_retryable() {
        let err = Error::UserNotFound {
            username: "ghost".to_string(),
        };
        assert!(!err.is_retryable());

        let err = Error::NoOutstandingDebt {
            debtor: "alice".to_string(),
            creditor: "bob".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_infrastructure_errors_are_retryable() {
        let err = Error::Database(sea_orm::DbErr::ConnectionAcquire(
            sea_orm::ConnAcquireErr::Timeout,
        ));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_error_messages_name_the_parties() {
        let err = Error::NoOutstandingDebt {
            debtor: "alice".to_string(),
            creditor: "bob".to_string(),
        };
        assert_eq!(err.to_string(), "no outstanding debt from 'alice' to 'bob'");
    }
}
