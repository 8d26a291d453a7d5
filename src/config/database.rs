//! Database configuration module for `DebtBook`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Account, Debt, Repayment};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
///
/// The URL comes from [`crate::config::load_app_configuration`]; tests pass
/// `sqlite::memory:` to get a throwaway store.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates tables for accounts, debts, and repayments.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let account_table = schema.create_table_from_entity(Account);
    let debt_table = schema.create_table_from_entity(Debt);
    let repayment_table = schema.create_table_from_entity(Repayment);

    db.execute(builder.build(&account_table)).await?;
    db.execute(builder.build(&debt_table)).await?;
    db.execute(builder.build(&repayment_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        account::Model as AccountModel, debt::Model as DebtModel,
        repayment::Model as RepaymentModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_connection() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Verify the connection works by executing a query
        let _: Vec<AccountModel> = Account::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that all tables exist by querying them
        let _: Vec<AccountModel> = Account::find().limit(1).all(&db).await?;
        let _: Vec<DebtModel> = Debt::find().limit(1).all(&db).await?;
        let _: Vec<RepaymentModel> = Repayment::find().limit(1).all(&db).await?;

        Ok(())
    }
}
