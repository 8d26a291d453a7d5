//! Account entity - Represents a registered user of the ledger.
//!
//! Each account has a unique, immutable `username`, a `password_hash` (an
//! opaque PHC string owned exclusively by the user directory), an `email`,
//! and a creation timestamp. Accounts are never deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique username, immutable once created
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 hash of the account password; never serialized outward
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact email address
    pub email: String,
    /// When the account was registered
    pub created_at: DateTimeUtc,
}

/// Accounts reference debts and repayments by username, not foreign key,
/// so no relations are declared here.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
