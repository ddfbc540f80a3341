//! Loading catalogs and invoices from JSON

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use domain_statement::{Invoice, PlayCatalog};

use crate::dto::{InvoicesDto, PlayCatalogDto};
use crate::error::CliError;

/// Reads and validates a play catalog file
pub fn load_plays(path: impl AsRef<Path>) -> Result<PlayCatalog, CliError> {
    let path = path.as_ref();
    let json = read(path)?;
    let catalog = parse_plays_from(&json, &path.display().to_string())?;

    info!(path = %path.display(), plays = catalog.len(), "Loaded play catalog");
    Ok(catalog)
}

/// Reads and validates an invoices file
pub fn load_invoices(path: impl AsRef<Path>) -> Result<Vec<Invoice>, CliError> {
    let path = path.as_ref();
    let json = read(path)?;
    let invoices = parse_invoices_from(&json, &path.display().to_string())?;

    info!(path = %path.display(), invoices = invoices.len(), "Loaded invoices");
    Ok(invoices)
}

/// Parses a play catalog from JSON text
pub fn parse_plays(json: &str) -> Result<PlayCatalog, CliError> {
    parse_plays_from(json, "play catalog")
}

/// Parses invoices from JSON text
pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>, CliError> {
    parse_invoices_from(json, "invoices")
}

fn parse_plays_from(json: &str, origin: &str) -> Result<PlayCatalog, CliError> {
    let dto: PlayCatalogDto = serde_json::from_str(json).map_err(|source| CliError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    dto.into_catalog()
}

fn parse_invoices_from(json: &str, origin: &str) -> Result<Vec<Invoice>, CliError> {
    let dto: InvoicesDto = serde_json::from_str(json).map_err(|source| CliError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    dto.into_invoices()
}

fn read(path: &Path) -> Result<String, CliError> {
    debug!(path = %path.display(), "Reading input file");
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
