//! Tests for string-backed catalog identifiers

use core_kernel::{CoreError, PlayId};

#[test]
fn test_parse_accepts_slug() {
    let id = PlayId::parse("as-like").unwrap();
    assert_eq!(id.as_str(), "as-like");
}

#[test]
fn test_parse_rejects_empty() {
    let result = PlayId::parse("");
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn test_parse_rejects_blank_with_kind() {
    let error = PlayId::parse("   ").unwrap_err();
    assert_eq!(error.to_string(), "Validation error: play id must not be empty");
}

#[test]
fn test_ordering_is_lexicographic() {
    let mut ids = vec![PlayId::from("othello"), PlayId::from("hamlet"), PlayId::from("as-like")];
    ids.sort();
    let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(names, vec!["as-like", "hamlet", "othello"]);
}
