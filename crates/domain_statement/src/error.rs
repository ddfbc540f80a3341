//! Statement domain errors

use core_kernel::PlayId;
use thiserror::Error;

/// Errors that abort the statement currently being produced
///
/// Every kind is deterministic for a given input: the same invoice and
/// catalog fail the same way every time, and no partial statement is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play id absent from the catalog
    #[error("Unknown play: {play_id}")]
    UnknownPlay {
        play_id: PlayId,
    },

    /// A play carries a billing type with no pricing rule
    #[error("Unknown play type: {0}")]
    UnknownPlayType(String),

    /// A statement total does not fit its numeric type
    #[error("Statement total overflowed: {0}")]
    TotalOverflow(&'static str),

    /// The statement template failed to render
    #[error("Render error: {0}")]
    Render(String),
}

impl StatementError {
    /// Creates an unknown play error
    pub fn unknown_play(play_id: &PlayId) -> Self {
        StatementError::UnknownPlay {
            play_id: play_id.clone(),
        }
    }
}

impl From<askama::Error> for StatementError {
    fn from(error: askama::Error) -> Self {
        StatementError::Render(error.to_string())
    }
}
