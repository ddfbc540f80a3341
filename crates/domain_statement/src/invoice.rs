//! Customer invoices
//!
//! An invoice lists the performances a customer booked. It is the raw input
//! to statement generation and is never modified by it.

use serde::{Deserialize, Serialize};

use core_kernel::PlayId;

/// One staging of a play for a given audience size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Catalog id of the play performed
    #[serde(rename = "playID", alias = "playId", alias = "play_id")]
    pub play_id: PlayId,
    /// Number of seats sold
    pub audience: u32,
}

impl Performance {
    /// Creates a new performance
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's booking of one or more performances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer being billed
    pub customer: String,
    /// Performances in billing order
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Creates an invoice with no performances
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Appends a performance
    pub fn with_performance(mut self, play_id: impl Into<PlayId>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }
}
