//! Command-Line Statement Printer
//!
//! This crate is the outer collaborator of the statement domain: it loads
//! the play catalog and invoices from JSON files, validates them, runs the
//! statement pipeline, and hands the rendered text back to the binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{cli::Cli, config::CliConfig, run};
//!
//! let config = CliConfig::from_env()?.with_cli(Cli::parse_args());
//! println!("{}", run(&config)?);
//! ```

pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod loader;

use tracing::info;

use domain_statement::{Invoice, PlayCatalog, StatementFormat, StatementPrinter};

use crate::config::CliConfig;
use crate::error::CliError;

/// Loads the configured inputs and renders every invoice
pub fn run(config: &CliConfig) -> Result<String, CliError> {
    let catalog = loader::load_plays(&config.plays_path)?;
    let invoices = loader::load_invoices(&config.invoices_path)?;

    let output = render_invoices(&invoices, &catalog, config.format)?;

    info!(statements = invoices.len(), format = %config.format, "Rendered statements");
    Ok(output)
}

/// Renders each invoice, separating statements with a blank line
///
/// Fails on the first invoice that cannot be priced.
pub fn render_invoices(
    invoices: &[Invoice],
    catalog: &PlayCatalog,
    format: StatementFormat,
) -> Result<String, CliError> {
    let printer = StatementPrinter::new();

    let statements = invoices
        .iter()
        .map(|invoice| printer.print_as(format, invoice, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(statements.join("\n\n"))
}
