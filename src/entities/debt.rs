//! Debt entity - Represents one obligation between a debtor and a creditor.
//!
//! Each debt is a single canonical row; the per-user "ledger views" are
//! queries over the `debtor` and `creditor` columns, so both parties always
//! see the same amounts and status. `remaining` only ever decreases, and
//! `status` is `"paid"` exactly when `remaining` reaches zero.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Debt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "debts")]
pub struct Model {
    /// Unique identifier for the debt
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Username of the party who owes
    pub debtor: String,
    /// Username of the party who is owed
    pub creditor: String,
    /// Original amount of the obligation
    pub amount: f64,
    /// Amount still owed; monotonically non-increasing
    pub remaining: f64,
    /// `"unpaid"` or `"paid"`
    pub status: String,
    /// When the debt was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Debt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One debt is reduced by many repayments
    #[sea_orm(has_many = "super::repayment::Entity")]
    Repayments,
}

impl Related<super::repayment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
