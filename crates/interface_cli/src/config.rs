//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

use domain_statement::StatementFormat;

/// Statement printer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// JSON play catalog, keyed by play id
    pub plays_path: PathBuf,
    /// JSON invoice list
    pub invoices_path: PathBuf,
    /// Output format
    pub format: StatementFormat,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            plays_path: PathBuf::from("plays.json"),
            invoices_path: PathBuf::from("invoices.json"),
            format: StatementFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `STATEMENT_*` environment variables
    ///
    /// Unset variables keep their default value. `STATEMENT_FORMAT` accepts
    /// the same names as the command line.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        config::Config::builder()
            .set_default("plays_path", defaults.plays_path.to_string_lossy().into_owned())?
            .set_default("invoices_path", defaults.invoices_path.to_string_lossy().into_owned())?
            .set_default("format", defaults.format.to_string())?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix("STATEMENT"))
            .build()?
            .try_deserialize()
    }

}
