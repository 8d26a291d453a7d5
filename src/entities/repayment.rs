//! Repayment entity - An immutable record of one payment attempt.
//!
//! Each repayment logs the full amount tendered against a debt, not the
//! portion actually applied: paying 100 against a remaining 60 logs 100.
//! Rows are append-only facts and are never updated after insertion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Repayment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repayments")]
pub struct Model {
    /// Unique identifier for the repayment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the debt this repayment was applied to
    pub debt_id: i64,
    /// Username of the paying party
    pub debtor: String,
    /// Username of the party being repaid
    pub creditor: String,
    /// Full amount tendered, which may exceed what was owed
    pub amount: f64,
    /// When the repayment was made
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Repayment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each repayment reduces exactly one debt
    #[sea_orm(
        belongs_to = "super::debt::Entity",
        from = "Column::DebtId",
        to = "super::debt::Column::Id"
    )]
    Debt,
}

impl Related<super::debt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
