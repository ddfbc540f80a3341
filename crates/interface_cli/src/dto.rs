//! Input data transfer objects
//!
//! JSON shapes of the play catalog and invoice files. DTOs are validated
//! before they are converted into domain types, so malformed input is
//! rejected before any statement is computed.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::Validate;

use core_kernel::PlayId;
use domain_statement::{Invoice, Performance, Play, PlayCatalog};

use crate::error::CliError;

/// A play entry of the catalog file
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayDto {
    #[validate(length(min = 1, message = "play name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "play type must not be empty"))]
    pub play_type: String,
}

/// The catalog file: an object keyed by play id
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalogDto {
    pub plays: BTreeMap<String, PlayDto>,
}

impl PlayCatalogDto {
    /// Validates every entry and builds the catalog
    pub fn into_catalog(self) -> Result<PlayCatalog, CliError> {
        let mut catalog = PlayCatalog::new();
        for (id, play) in self.plays {
            let play_id = PlayId::parse(id)?;
            play.validate()?;
            catalog.insert(play_id, Play::new(play.name, play.play_type));
        }
        Ok(catalog)
    }
}

/// A performance entry of an invoice
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PerformanceDto {
    #[serde(rename = "playID", alias = "playId", alias = "play_id")]
    #[validate(length(min = 1, message = "play id must not be empty"))]
    pub play_id: String,
    pub audience: u32,
}

/// An invoice of the invoices file
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceDto {
    #[validate(length(min = 1, message = "customer must not be empty"))]
    pub customer: String,
    #[serde(default)]
    pub performances: Vec<PerformanceDto>,
}

impl InvoiceDto {
    /// Validates the invoice and each performance, then converts it
    pub fn into_invoice(self) -> Result<Invoice, CliError> {
        self.validate()?;

        let mut performances = Vec::with_capacity(self.performances.len());
        for performance in self.performances {
            performance.validate()?;
            performances.push(Performance::new(performance.play_id, performance.audience));
        }

        Ok(Invoice {
            customer: self.customer,
            performances,
        })
    }
}

/// The invoices file: a list of invoices, or a single invoice object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InvoicesDto {
    Many(Vec<InvoiceDto>),
    One(InvoiceDto),
}

impl InvoicesDto {
    pub fn into_invoices(self) -> Result<Vec<Invoice>, CliError> {
        match self {
            InvoicesDto::Many(invoices) => invoices.into_iter().map(InvoiceDto::into_invoice).collect(),
            InvoicesDto::One(invoice) => Ok(vec![invoice.into_invoice()?]),
        }
    }
}
