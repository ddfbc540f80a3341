//! Performance enrichment
//!
//! Joins a raw performance with its catalog entry and the charge and credits
//! computed for it. The result is what the aggregator sums and the renderer
//! prints.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use core_kernel::PlayId;

use crate::error::StatementError;
use crate::invoice::Performance;
use crate::play::{Play, PlayCatalog};
use crate::pricing::{amount_for, volume_credits_for};

/// A performance with its play, charge and volume credits resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance {
    play_id: PlayId,
    audience: u32,
    play: Arc<Play>,
    amount: i64,
    volume_credits: u64,
}

impl EnrichedPerformance {
    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }

    /// The catalog entry, shared with the catalog
    pub fn play(&self) -> &Play {
        &self.play
    }

    /// Charge in cents
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }

    /// Recovers the raw performance this record was built from
    pub fn to_performance(&self) -> Performance {
        Performance::new(self.play_id.clone(), self.audience)
    }
}

/// Resolves a performance against the catalog and prices it
///
/// # Errors
///
/// * `StatementError::UnknownPlay` if the play id is not in the catalog
/// * `StatementError::UnknownPlayType` if the play's type has no pricing rule
pub fn enrich(
    performance: &Performance,
    catalog: &PlayCatalog,
) -> Result<EnrichedPerformance, StatementError> {
    let play = catalog
        .get(&performance.play_id)
        .ok_or_else(|| StatementError::unknown_play(&performance.play_id))?;

    let amount = amount_for(&play.play_type, performance.audience)?;
    let volume_credits = volume_credits_for(&play.play_type, performance.audience);

    debug!(
        play_id = %performance.play_id,
        audience = performance.audience,
        amount,
        volume_credits,
        "Enriched performance"
    );

    Ok(EnrichedPerformance {
        play_id: performance.play_id.clone(),
        audience: performance.audience,
        play: Arc::clone(play),
        amount,
        volume_credits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"))
            .with_play("henry-v", Play::new("Henry V", "history"))
    }

    #[test]
    fn test_enrich_comedy() {
        let catalog = catalog();
        let enriched = enrich(&Performance::new("as-like", 25), &catalog).unwrap();

        assert_eq!(enriched.play_id().as_str(), "as-like");
        assert_eq!(enriched.audience(), 25);
        assert_eq!(enriched.play().name, "As You Like It");
        assert_eq!(enriched.amount(), 50_000);
        assert_eq!(enriched.volume_credits(), 5);
    }

    #[test]
    fn test_enrich_shares_catalog_entry() {
        let catalog = catalog();
        let enriched = enrich(&Performance::new("othello", 35), &catalog).unwrap();
        let entry = catalog.get(&PlayId::from("othello")).unwrap();

        assert!(Arc::ptr_eq(&enriched.play, entry));
    }

    #[test]
    fn test_enrich_unknown_play() {
        let result = enrich(&Performance::new("macbeth", 10), &catalog());
        assert_eq!(
            result,
            Err(StatementError::UnknownPlay { play_id: PlayId::from("macbeth") })
        );
    }

    #[test]
    fn test_enrich_unknown_type() {
        let result = enrich(&Performance::new("henry-v", 10), &catalog());
        assert_eq!(result, Err(StatementError::UnknownPlayType("history".into())));
    }

    #[test]
    fn test_to_performance() {
        let performance = Performance::new("othello", 40);
        let enriched = enrich(&performance, &catalog()).unwrap();
        assert_eq!(enriched.to_performance(), performance);
    }
}
