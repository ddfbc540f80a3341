//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for statement types that give
//! more meaningful error messages than standard assertions.

use domain_statement::{Invoice, StatementData, StatementError};

/// Asserts that the statement totals equal the sum of its lines
///
/// # Panics
///
/// Panics if either total differs from the sum of the per-performance values
pub fn assert_totals_consistent(data: &StatementData) {
    let amount: i64 = data.performances().iter().map(|p| p.amount()).sum();
    let credits: u64 = data.performances().iter().map(|p| p.volume_credits()).sum();

    assert_eq!(
        data.total_amount(),
        amount,
        "Total amount ({}) doesn't equal sum of performance amounts ({})",
        data.total_amount(),
        amount
    );
    assert_eq!(
        data.total_volume_credits(),
        credits,
        "Total credits ({}) doesn't equal sum of performance credits ({})",
        data.total_volume_credits(),
        credits
    );
}

/// Asserts that the statement lists the invoice's performances in order
pub fn assert_preserves_invoice_order(invoice: &Invoice, data: &StatementData) {
    assert_eq!(
        invoice.performances.len(),
        data.performances().len(),
        "Statement has {} performances, invoice has {}",
        data.performances().len(),
        invoice.performances.len()
    );

    for (index, (raw, enriched)) in invoice.performances.iter().zip(data.performances()).enumerate() {
        assert_eq!(
            raw,
            &enriched.to_performance(),
            "Performance {} differs between invoice and statement",
            index
        );
    }
}

/// Asserts that a statement failed because of an unknown play
pub fn assert_unknown_play<T: std::fmt::Debug>(result: Result<T, StatementError>, expected_id: &str) {
    match result {
        Err(StatementError::UnknownPlay { play_id }) => assert_eq!(
            play_id.as_str(),
            expected_id,
            "Unknown play reported for {} instead of {}",
            play_id,
            expected_id
        ),
        other => panic!("Expected UnknownPlay({}), got {:?}", expected_id, other),
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
