//! Tests for ErrorPolicy parsing and defaults.

use crate::error::ErrorPolicy;

#[test]
fn error_policy_default_is_accumulate() {
    let policy = ErrorPolicy::default();
    assert_eq!(policy, ErrorPolicy::Accumulate);
}

#[test]
fn error_policy_from_str_accepts_aliases() {
    assert_eq!(ErrorPolicy::from_str("fast_fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("FastFail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("fast-fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("accumulate"), Some(ErrorPolicy::Accumulate));
    assert_eq!(ErrorPolicy::from_str("never"), None);
}
