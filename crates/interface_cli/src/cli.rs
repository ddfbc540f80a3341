//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use domain_statement::StatementFormat;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "statement")]
#[command(version, about = "Print theatrical billing statements from JSON plays and invoices")]
pub struct Cli {
    /// Play catalog JSON file, keyed by play id
    #[arg(value_name = "PLAYS", env = "STATEMENT_PLAYS_PATH")]
    pub plays: Option<PathBuf>,

    /// Invoices JSON file, one invoice or a list
    #[arg(value_name = "INVOICES", env = "STATEMENT_INVOICES_PATH")]
    pub invoices: Option<PathBuf>,

    /// Output format: text (txt, plain) or html (htm)
    #[arg(value_name = "FORMAT", env = "STATEMENT_FORMAT")]
    pub format: Option<StatementFormat>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", env = "STATEMENT_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl CliConfig {
    /// Overrides configured values with the ones given on the command line
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(plays) = cli.plays {
            self.plays_path = plays;
        }
        if let Some(invoices) = cli.invoices {
            self.invoices_path = invoices;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        self
    }
}
