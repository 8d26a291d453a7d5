//! Bootstrap binary: prepares the ledger database.
//!
//! Initializes logging, loads configuration, connects to the store, and
//! creates the schema. The ledger itself is a library; embed
//! [`debtbook::service::DebtService`] behind the transport of your choice.

use debtbook::config;
use debtbook::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!("Using database at {}", app_config.database_url);

    // 4. Initialize database schema
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Ledger tables ready."))
        .inspect_err(|e| error!("Failed to create ledger tables: {e}"))?;

    Ok(())
}
