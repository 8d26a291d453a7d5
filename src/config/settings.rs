//! Application settings loading.
//!
//! Settings come from an optional `config.toml` with environment variables
//! taking precedence, so deployments can override the file without editing
//! it. Currently the only setting is the database URL.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default store location when neither the environment nor config.toml
/// provides one.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/debtbook.sqlite?mode=rwc";

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL for the ledger database
    pub database_url: String,
}

/// Configuration structure representing the config.toml file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    database: Option<DatabaseSection>,
}

/// The `[database]` section of config.toml
#[derive(Debug, Deserialize)]
struct DatabaseSection {
    url: Option<String>,
}

/// Loads application configuration from the default location (./config.toml),
/// tolerating a missing file.
///
/// Precedence: `DATABASE_URL` environment variable, then `config.toml`,
/// then the built-in default.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file_url = match load_config_file("config.toml") {
        Ok(config) => config.database.and_then(|d| d.url),
        Err(Error::Io(_)) => None,
        Err(e) => return Err(e),
    };

    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .or(file_url)
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    Ok(AppConfig { database_url })
}

/// Parses a TOML configuration file.
fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {path_ref:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_database_section() {
        let toml_str = r#"
            [database]
            url = "sqlite://tmp/ledger.sqlite?mode=rwc"
        "#;

        let config: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.database.unwrap().url.unwrap(),
            "sqlite://tmp/ledger.sqlite?mode=rwc"
        );
    }

    #[test]
    fn test_empty_config_file_is_valid() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn test_missing_config_file_falls_back_to_default() {
        let result = load_config_file("does-not-exist.toml");
        assert!(matches!(result.unwrap_err(), Error::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let dir = std::env::temp_dir().join("debtbook-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[database\nurl = ").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
