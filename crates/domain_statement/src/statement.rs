//! Statement aggregation
//!
//! Builds the fully-typed `StatementData` a renderer consumes. Aggregation is
//! all-or-nothing: the first performance that cannot be enriched aborts the
//! whole statement.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::enrichment::{enrich, EnrichedPerformance};
use crate::error::StatementError;
use crate::invoice::Invoice;
use crate::play::PlayCatalog;

/// Everything a statement shows, computed once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementData {
    customer: String,
    performances: Vec<EnrichedPerformance>,
    total_amount: i64,
    total_volume_credits: u64,
}

impl StatementData {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Enriched performances in invoice order
    pub fn performances(&self) -> &[EnrichedPerformance] {
        &self.performances
    }

    /// Amount owed in cents
    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

/// Enriches every performance of the invoice and sums the results
///
/// # Errors
///
/// Propagates the first `StatementError` raised while enriching a
/// performance, or `TotalOverflow` when a total leaves its integer range;
/// no partial statement is returned.
#[instrument(skip_all, fields(customer = %invoice.customer, performances = invoice.performances.len()))]
pub fn aggregate(invoice: &Invoice, catalog: &PlayCatalog) -> Result<StatementData, StatementError> {
    let performances = invoice
        .performances
        .iter()
        .map(|performance| {
            enrich(performance, catalog).inspect_err(|error| {
                warn!(play_id = %performance.play_id, %error, "Failed to enrich performance");
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_amount = sum_amounts(performances.iter().map(EnrichedPerformance::amount))?;
    let total_volume_credits =
        sum_credits(performances.iter().map(EnrichedPerformance::volume_credits))?;

    debug!(total_amount, total_volume_credits, "Aggregated statement");

    Ok(StatementData {
        customer: invoice.customer.clone(),
        performances,
        total_amount,
        total_volume_credits,
    })
}

fn sum_amounts(mut amounts: impl Iterator<Item = i64>) -> Result<i64, StatementError> {
    amounts.try_fold(0i64, |total, amount| {
        total
            .checked_add(amount)
            .ok_or(StatementError::TotalOverflow("amount"))
    })
}

fn sum_credits(mut credits: impl Iterator<Item = u64>) -> Result<u64, StatementError> {
    credits.try_fold(0u64, |total, credit| {
        total
            .checked_add(credit)
            .ok_or(StatementError::TotalOverflow("volume credits"))
    })
}
