//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_statement::{Invoice, Performance, Play, PlayCatalog, PlayType};

use crate::fixtures::PlayFixtures;

/// Builder for constructing test invoices
pub struct TestInvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a new builder with no performances
    pub fn new() -> Self {
        Self {
            customer: "BigCo".to_string(),
            performances: Vec::new(),
        }
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Adds a performance
    pub fn with_performance(mut self, play_id: &str, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    /// Adds one performance of the sample comedy
    pub fn with_comedy(self, audience: u32) -> Self {
        self.with_performance("as-like", audience)
    }

    /// Adds one performance of the sample tragedy
    pub fn with_tragedy(self, audience: u32) -> Self {
        self.with_performance("hamlet", audience)
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        Invoice {
            customer: self.customer,
            performances: self.performances,
        }
    }
}

/// Builder for constructing test play catalogs
pub struct TestCatalogBuilder {
    catalog: PlayCatalog,
}

impl Default for TestCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalogBuilder {
    /// Creates an empty catalog builder
    pub fn new() -> Self {
        Self {
            catalog: PlayCatalog::new(),
        }
    }

    /// Starts from the sample catalog
    pub fn sample() -> Self {
        Self {
            catalog: PlayFixtures::catalog(),
        }
    }

    /// Adds a play of the given type, named after its id
    pub fn with_play(mut self, id: &str, play_type: impl Into<PlayType>) -> Self {
        self.catalog.insert(id, Play::new(id.to_uppercase(), play_type));
        self
    }

    /// Builds the catalog
    pub fn build(self) -> PlayCatalog {
        self.catalog
    }
}
