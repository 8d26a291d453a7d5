//! Shared test utilities for `DebtBook`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{account, debt},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Registers a test user with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `username` - Username to register
///
/// # Defaults
/// * password: `"hunter2"`
/// * email: `"<username>@example.com"`
pub async fn register_test_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::account::Model> {
    account::register_account(db, username, "hunter2", &format!("{username}@example.com")).await
}

/// Records a test debt between two registered users.
pub async fn create_test_debt(
    db: &DatabaseConnection,
    debtor: &str,
    creditor: &str,
    amount: f64,
) -> Result<entities::debt::Model> {
    debt::record_debt(db, debtor, creditor, amount).await
}

/// Sets up a complete test environment with two registered users.
/// Returns (db, alice, bob) for common two-party scenarios.
pub async fn setup_with_pair() -> Result<(
    DatabaseConnection,
    entities::account::Model,
    entities::account::Model,
)> {
    let db = setup_test_db().await?;
    let alice = register_test_user(&db, "alice").await?;
    let bob = register_test_user(&db, "bob").await?;
    Ok((db, alice, bob))
}
