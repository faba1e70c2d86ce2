//! Property-based tests for the rule engine.
//!
//! These tests use proptest to verify, for arbitrary input strings:
//! - Report validity agrees with the failure list
//! - The length rule is an exact match
//! - Failures are reported in canonical rule order
//! - Validation is deterministic

use crate::{Rule, RuleEngine};
use proptest::prelude::*;
use secrecy::SecretString;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Arbitrary strings, biased toward lengths around the required 16.
fn arb_password() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::collection::vec(any::<char>(), 15..=17)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
        prop::string::string_regex("[A-Za-z0-9!@#$%^&*()_+=;:,.<>? ~é]{15,17}").unwrap(),
    ]
}

// ============================================================================
// Report properties
// ============================================================================

proptest! {
    /// A report is valid exactly when it lists no failures.
    #[test]
    fn validity_matches_empty_failures(pwd in arb_password()) {
        let report = RuleEngine::new().validate_str(&pwd);
        prop_assert_eq!(report.is_valid(), report.failures().is_empty());
    }

    /// Only exactly 16 characters satisfy the length rule.
    #[test]
    fn length_rule_is_exact(pwd in arb_password()) {
        let engine = RuleEngine::new();
        prop_assert_eq!(engine.check_length(&pwd), pwd.chars().count() == 16);
    }

    /// Failed rules appear once each, in canonical order, and match the single checks.
    #[test]
    fn failures_follow_canonical_order(pwd in arb_password()) {
        let engine = RuleEngine::new();
        let report = engine.validate_str(&pwd);
        let failed = report.failed_rules();

        prop_assert!(failed.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", failed);

        let expected: Vec<Rule> = Rule::ALL
            .into_iter()
            .filter(|rule| !rule.check(&pwd, engine.policy()))
            .collect();
        prop_assert_eq!(&failed, &expected);

        let messages: Vec<String> = failed
            .iter()
            .map(|rule| rule.failure_message(engine.policy()))
            .collect();
        prop_assert_eq!(report.messages(), messages);
    }

    /// Validating the same string twice gives identical reports.
    #[test]
    fn validate_is_idempotent(pwd in arb_password()) {
        let engine = RuleEngine::new();
        let secret = SecretString::new(pwd.clone().into());
        let first = engine.validate(&secret);
        prop_assert_eq!(&first, &engine.validate(&secret));
        prop_assert_eq!(&first, &engine.validate_str(&pwd));
    }
}
