//! Debt ledger engine - Records obligations and resolves repayments.
//!
//! Every obligation is one canonical row in the `debts` table; a user's
//! "ledger view" is the set of rows naming them as debtor or creditor, so the
//! two parties' views of the same debt can never diverge. Settlement picks
//! the oldest unpaid debt for the pair, logs the repayment, and updates the
//! balance inside a single database transaction. The repayment log insert and
//! the balance update commit or roll back together, and the decrement itself
//! is a guarded atomic SQL update, so concurrent settlements cannot both
//! apply against the same read snapshot.

use crate::{
    core::{account, repayment},
    entities::{Debt, debt},
    errors::{Error, Result},
};
use sea_orm::{Condition, ConnectionTrait, DbErr, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Status of a debt that still carries a remaining balance.
pub const STATUS_UNPAID: &str = "unpaid";
/// Status of a debt whose remaining balance has reached zero.
pub const STATUS_PAID: &str = "paid";

/// Rejects amounts that are not finite, positive numbers.
fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Records a new debt between two registered users.
///
/// Both parties must resolve through the user directory before anything is
/// written, so a failed call leaves no trace in either ledger view. Multiple
/// debts between the same pair coexist as separate records; there is no
/// duplicate detection.
///
/// # Arguments
/// * `db` - Database connection
/// * `debtor` - Username of the party who owes
/// * `creditor` - Username of the party who is owed
/// * `amount` - Positive amount of the obligation
pub async fn record_debt(
    db: &DatabaseConnection,
    debtor: &str,
    creditor: &str,
    amount: f64,
) -> Result<debt::Model> {
    validate_amount(amount)?;

    if debtor == creditor {
        return Err(Error::SelfDebt {
            username: debtor.to_string(),
        });
    }

    account::get_account_by_username(db, debtor)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: debtor.to_string(),
        })?;
    account::get_account_by_username(db, creditor)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: creditor.to_string(),
        })?;

    let debt = debt::ActiveModel {
        debtor: Set(debtor.to_string()),
        creditor: Set(creditor.to_string()),
        amount: Set(amount),
        remaining: Set(amount),
        status: Set(STATUS_UNPAID.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = debt.insert(db).await?;
    info!(
        debtor = %result.debtor,
        creditor = %result.creditor,
        amount = result.amount,
        id = result.id,
        "Recorded debt"
    );
    Ok(result)
}

/// Returns every debt in a user's ledger view, oldest first.
///
/// The view covers both roles: debts the user owes and debts owed to them.
/// Fails with [`Error::UserNotFound`] for names that were never registered.
pub async fn list_debts_for_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Vec<debt::Model>> {
    account::get_account_by_username(db, username)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: username.to_string(),
        })?;

    Debt::find()
        .filter(
            Condition::any()
                .add(debt::Column::Debtor.eq(username))
                .add(debt::Column::Creditor.eq(username)),
        )
        .order_by_asc(debt::Column::CreatedAt)
        .order_by_asc(debt::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Settles the oldest unpaid debt from `debtor` to `creditor`.
///
/// The repayment log records the full tendered amount before the balance is
/// touched; a payment of 100 against a remaining 60 is logged as 100, and the
/// excess is absorbed rather than refunded or carried over. Partial payments
/// decrement `remaining` and leave the status unpaid; payments covering the
/// whole balance mark the debt paid with `remaining = 0`. Both writes happen
/// in one database transaction.
///
/// # Arguments
/// * `db` - Database connection
/// * `debtor` - Username of the paying party
/// * `creditor` - Username of the party being repaid
/// * `amount` - Positive amount tendered
///
/// # Returns
/// The debt as it stands after the settlement was applied.
pub async fn settle_debt(
    db: &DatabaseConnection,
    debtor: &str,
    creditor: &str,
    amount: f64,
) -> Result<debt::Model> {
    validate_amount(amount)?;

    account::get_account_by_username(db, debtor)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: debtor.to_string(),
        })?;
    account::get_account_by_username(db, creditor)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: creditor.to_string(),
        })?;

    // One transaction spans the log append and the balance update
    let txn = db.begin().await?;

    // Oldest unpaid debt first; id breaks ties within one timestamp
    let debt = Debt::find()
        .filter(debt::Column::Debtor.eq(debtor))
        .filter(debt::Column::Creditor.eq(creditor))
        .filter(debt::Column::Status.eq(STATUS_UNPAID))
        .order_by_asc(debt::Column::CreatedAt)
        .order_by_asc(debt::Column::Id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::NoOutstandingDebt {
            debtor: debtor.to_string(),
            creditor: creditor.to_string(),
        })?;

    // The log records the payment attempt regardless of how much of it
    // the balance actually needed
    repayment::append_repayment(&txn, debt.id, debtor, creditor, amount).await?;

    let debt_id = debt.id;
    let updated = if amount >= debt.remaining {
        let mut active: debt::ActiveModel = debt.into();
        active.remaining = Set(0.0);
        active.status = Set(STATUS_PAID.to_string());
        active.update(&txn).await?
    } else {
        decrement_remaining_atomic(&txn, debt_id, amount).await?;
        Debt::find_by_id(debt_id)
            .one(&txn)
            .await?
            .ok_or_else(|| Error::Database(DbErr::RecordNotFound(format!("debt {debt_id}"))))?
    };

    txn.commit().await?;

    info!(
        debtor = %updated.debtor,
        creditor = %updated.creditor,
        amount,
        remaining = updated.remaining,
        status = %updated.status,
        id = updated.id,
        "Settled debt"
    );
    Ok(updated)
}

/// Atomically decrements the remaining balance of an unpaid debt.
///
/// Instead of reading the balance, subtracting, and writing it back (which
/// loses updates under concurrency), this issues a single guarded statement:
/// `UPDATE debts SET remaining = remaining - ? WHERE id = ? AND status = 'unpaid'`
async fn decrement_remaining_atomic<C>(db: &C, debt_id: i64, amount: f64) -> Result<()>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    Debt::update_many()
        .col_expr(
            debt::Column::Remaining,
            Expr::col(debt::Column::Remaining).sub(amount),
        )
        .filter(debt::Column::Id.eq(debt_id))
        .filter(debt::Column::Status.eq(STATUS_UNPAID))
        .exec(db)
        .await?;

    Ok(())
}
