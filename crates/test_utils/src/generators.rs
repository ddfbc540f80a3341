//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating invoices that only reference
//! plays from the sample catalog, so every generated invoice aggregates.

use domain_statement::{Invoice, Performance, PlayType};
use proptest::prelude::*;

/// Strategy for audience sizes, covering both sides of every threshold
pub fn audience_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..=40,
        41u32..10_000,
    ]
}

/// Strategy for recognized play types
pub fn play_type_strategy() -> impl Strategy<Value = PlayType> {
    prop_oneof![
        Just(PlayType::Comedy),
        Just(PlayType::Tragedy),
    ]
}

/// Strategy for play type tags with no pricing rule
pub fn unrecognized_play_type_strategy() -> impl Strategy<Value = PlayType> {
    "[a-z]{3,12}"
        .prop_filter("must not be a recognized tag", |tag| tag != "comedy" && tag != "tragedy")
        .prop_map(PlayType::Unrecognized)
}

/// Strategy for ids present in the sample catalog
pub fn sample_play_id_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("hamlet"),
        Just("as-like"),
        Just("othello"),
    ]
}

/// Strategy for performances of sample catalog plays
pub fn performance_strategy() -> impl Strategy<Value = Performance> {
    (sample_play_id_strategy(), audience_strategy())
        .prop_map(|(play_id, audience)| Performance::new(play_id, audience))
}

/// Strategy for invoices against the sample catalog
pub fn invoice_strategy() -> impl Strategy<Value = Invoice> {
    ("[A-Z][a-z]{2,10}( Co)?", prop::collection::vec(performance_strategy(), 0..12))
        .prop_map(|(customer, performances)| Invoice { customer, performances })
}
