//! Repayment log - the append-only record of payment events.
//!
//! Appends happen only from [`crate::core::debt::settle_debt`], inside its
//! transaction; the append itself performs no business validation and no
//! deduplication. Rows are immutable facts once written.

use crate::{
    core::account,
    entities::{Repayment, repayment},
    errors::{Error, Result},
};
use sea_orm::{Condition, ConnectionTrait, QueryOrder, Set, prelude::*};

/// Appends one repayment record to the log.
///
/// A pure insert. The amount is whatever the caller tendered, even when it
/// exceeds what was owed; clamping is deliberately not done here so the log
/// reflects payment attempts, not applied balances.
pub async fn append_repayment<C>(
    db: &C,
    debt_id: i64,
    debtor: &str,
    creditor: &str,
    amount: f64,
) -> Result<repayment::Model>
where
    C: ConnectionTrait,
{
    let repayment = repayment::ActiveModel {
        debt_id: Set(debt_id),
        debtor: Set(debtor.to_string()),
        creditor: Set(creditor.to_string()),
        amount: Set(amount),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    repayment.insert(db).await.map_err(Into::into)
}

/// Returns every repayment involving a user, oldest first.
///
/// Covers both directions: payments the user made and payments made to them.
/// Fails with [`Error::UserNotFound`] for names that were never registered.
pub async fn list_repayments_for_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Vec<repayment::Model>> {
    account::get_account_by_username(db, username)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: username.to_string(),
        })?;

    Repayment::find()
        .filter(
            Condition::any()
                .add(repayment::Column::Debtor.eq(username))
                .add(repayment::Column::Creditor.eq(username)),
        )
        .order_by_asc(repayment::Column::CreatedAt)
        .order_by_asc(repayment::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
