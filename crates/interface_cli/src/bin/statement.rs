//! Theatrical Billing - Statement Printer Binary
//!
//! Prints the statement of every invoice in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (plays.json, invoices.json, text)
//! cargo run --bin statement
//!
//! # Positional arguments override the environment
//! cargo run --bin statement -- plays.json invoices.json html
//!
//! # Usage and accepted values
//! cargo run --bin statement -- --help
//! ```
//!
//! # Environment Variables
//!
//! * `STATEMENT_PLAYS_PATH` - Play catalog file (default: plays.json)
//! * `STATEMENT_INVOICES_PATH` - Invoices file (default: invoices.json)
//! * `STATEMENT_FORMAT` - Output format: text (txt, plain) or html (htm) (default: text)
//! * `STATEMENT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;
use interface_cli::cli::Cli;
use interface_cli::config::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();

    let config = CliConfig::from_env()
        .context("Failed to load configuration from environment")?
        .with_cli(cli);

    init_tracing(&config.log_level);

    tracing::info!(
        plays = %config.plays_path.display(),
        invoices = %config.invoices_path.display(),
        format = %config.format,
        "Printing statements"
    );

    let output = interface_cli::run(&config).context("Failed to print statements")?;
    println!("{output}");

    Ok(())
}

/// Initializes the tracing subscriber, logging to stderr so stdout carries
/// only the statements.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
