//! One-call statement printing
//!
//! `StatementPrinter` aggregates an invoice once and renders the result, for
//! callers that do not need the intermediate `StatementData`.

use crate::error::StatementError;
use crate::invoice::Invoice;
use crate::play::PlayCatalog;
use crate::render::{CurrencyFormatter, MoneyFormatter, StatementFormat};
use crate::statement::{aggregate, StatementData};

/// Aggregates and renders statements with a fixed currency formatter
#[derive(Debug, Clone, Default)]
pub struct StatementPrinter<F = MoneyFormatter> {
    formatter: F,
}

impl StatementPrinter<MoneyFormatter> {
    /// Creates a printer that renders US dollars
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: CurrencyFormatter> StatementPrinter<F> {
    /// Creates a printer with a custom currency formatter
    pub fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// Plain-text statement for the invoice
    pub fn print(&self, invoice: &Invoice, catalog: &PlayCatalog) -> Result<String, StatementError> {
        self.print_as(StatementFormat::Text, invoice, catalog)
    }

    /// HTML statement for the invoice
    pub fn print_html(&self, invoice: &Invoice, catalog: &PlayCatalog) -> Result<String, StatementError> {
        self.print_as(StatementFormat::Html, invoice, catalog)
    }

    /// Statement for the invoice in the requested format
    pub fn print_as(
        &self,
        format: StatementFormat,
        invoice: &Invoice,
        catalog: &PlayCatalog,
    ) -> Result<String, StatementError> {
        let data = aggregate(invoice, catalog)?;
        self.render(format, &data)
    }

    /// Renders already-aggregated data
    pub fn render(&self, format: StatementFormat, data: &StatementData) -> Result<String, StatementError> {
        format.render(data, &self.formatter)
    }
}
