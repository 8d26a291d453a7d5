//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod debt;
pub mod repayment;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use debt::{Column as DebtColumn, Entity as Debt, Model as DebtModel};
pub use repayment::{Column as RepaymentColumn, Entity as Repayment, Model as RepaymentModel};
