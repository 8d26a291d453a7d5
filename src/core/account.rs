//! Account business logic - the user directory.
//!
//! The only writer of account records. Registration validates the username,
//! delegates hashing to [`crate::core::password`], and rejects duplicates;
//! lookups are pure reads. Under the canonical-record ledger there is nothing
//! to provision per user at registration time: a fresh account's ledger view
//! is simply the empty result set.

use crate::{
    core::password,
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Registers a new user with a securely hashed password.
///
/// The plaintext password never leaves this function. Fails with
/// [`Error::DuplicateUser`] if the username is already taken, and with a
/// config-style error for empty usernames. The username is trimmed before
/// storage and comparison.
pub async fn register_account(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    email: &str,
) -> Result<account::Model> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::Config {
            message: "Username cannot be empty".to_string(),
        });
    }

    if get_account_by_username(db, username).await?.is_some() {
        return Err(Error::DuplicateUser {
            username: username.to_string(),
        });
    }

    let password_hash = password::hash_password(password)?;

    let account = account::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(password_hash),
        email: Set(email.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    info!(username = %result.username, id = result.id, "Registered new account");
    Ok(result)
}

/// Finds an account by username, returning None if it was never registered.
///
/// This is the single source of truth for "does this user exist"; the debt
/// and repayment modules resolve both parties through it before writing
/// anything.
pub async fn get_account_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}
