//! Pricing rules per play type
//!
//! Each billing category has two independent formulas: the charge for a
//! performance (in cents) and the volume credits it earns. Both are pure
//! functions of the play type and the audience size.
//!
//! # Charges
//!
//! ```text
//! comedy:  30000 + 300·a          (+ 10000 + 500·(a − 20) when a > 20)
//! tragedy: 40000                  (+ 1000·(a − 30)        when a > 30)
//! ```
//!
//! # Volume credits
//!
//! ```text
//! all types: max(a − 30, 0)
//! comedy:    + ⌊a / 5⌋
//! ```

use crate::error::StatementError;
use crate::play::PlayType;

/// Base charge for a comedy, in cents
pub const COMEDY_BASE: i64 = 30_000;
/// Audience size above which the comedy surcharge applies
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
/// Flat comedy surcharge once the threshold is exceeded
pub const COMEDY_SURCHARGE: i64 = 10_000;
/// Per-seat comedy charge above the threshold
pub const COMEDY_PER_EXTRA_SEAT: i64 = 500;
/// Per-seat comedy charge applied to every seat
pub const COMEDY_PER_SEAT: i64 = 300;

/// Base charge for a tragedy, in cents
pub const TRAGEDY_BASE: i64 = 40_000;
/// Audience size above which tragedies charge per extra seat
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
/// Per-seat tragedy charge above the threshold
pub const TRAGEDY_PER_EXTRA_SEAT: i64 = 1_000;

/// Audience size above which every play earns base credits
pub const CREDIT_AUDIENCE_THRESHOLD: u32 = 30;
/// Comedies earn one bonus credit per this many attendees
pub const COMEDY_CREDIT_DIVISOR: u32 = 5;

/// Charge in cents for a performance of the given type
///
/// # Errors
///
/// Returns `StatementError::UnknownPlayType` carrying the offending tag
/// when the type has no pricing rule.
pub fn amount_for(play_type: &PlayType, audience: u32) -> Result<i64, StatementError> {
    let seats = i64::from(audience);

    match play_type {
        PlayType::Comedy => {
            let mut amount = COMEDY_BASE;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                let extra = i64::from(audience - COMEDY_AUDIENCE_THRESHOLD);
                amount += COMEDY_SURCHARGE + COMEDY_PER_EXTRA_SEAT * extra;
            }
            amount += COMEDY_PER_SEAT * seats;
            Ok(amount)
        }
        PlayType::Tragedy => {
            let mut amount = TRAGEDY_BASE;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                let extra = i64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD);
                amount += TRAGEDY_PER_EXTRA_SEAT * extra;
            }
            Ok(amount)
        }
        PlayType::Unrecognized(tag) => Err(StatementError::UnknownPlayType(tag.clone())),
    }
}

/// Volume credits earned by a performance of the given type
///
/// Only comedies earn the attendance bonus; every other type, recognized
/// or not, earns the base credits alone.
pub fn volume_credits_for(play_type: &PlayType, audience: u32) -> u64 {
    let base = u64::from(audience.saturating_sub(CREDIT_AUDIENCE_THRESHOLD));

    match play_type {
        PlayType::Comedy => base + u64::from(audience / COMEDY_CREDIT_DIVISOR),
        PlayType::Tragedy | PlayType::Unrecognized(_) => base,
    }
}
