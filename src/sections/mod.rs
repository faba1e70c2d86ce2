//! Evaluation sections - one predicate per policy rule.

mod length;
mod special;
mod variety;

use std::fmt;

use crate::policy::Policy;

pub use length::check_length;
pub use special::check_special;
pub use variety::{check_digit, check_lowercase, check_uppercase};

/// A single policy rule.
///
/// Variants are declared in canonical order: rules are evaluated and
/// failures reported in the order of [`Rule::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Rule {
    /// All rules in canonical order.
    pub const ALL: [Rule; 5] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
        }
    }

    /// Returns `true` if `password` satisfies this rule under `policy`.
    pub fn check(self, password: &str, policy: &Policy) -> bool {
        match self {
            Rule::Length => check_length(password, policy),
            Rule::Uppercase => check_uppercase(password),
            Rule::Lowercase => check_lowercase(password),
            Rule::Digit => check_digit(password),
            Rule::Special => check_special(password, policy),
        }
    }

    /// Human-readable message reported when this rule is not satisfied.
    pub fn failure_message(self, policy: &Policy) -> String {
        match self {
            Rule::Length => format!(
                "Password must be exactly {} characters long",
                policy.required_length()
            ),
            Rule::Uppercase => {
                "Password must contain at least one uppercase letter (A-Z)".to_string()
            }
            Rule::Lowercase => {
                "Password must contain at least one lowercase letter (a-z)".to_string()
            }
            Rule::Digit => "Password must contain at least one number (0-9)".to_string(),
            Rule::Special => format!(
                "Password must contain at least one special character ({})",
                policy.special_characters()
            ),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_declaration_order() {
        let mut sorted = Rule::ALL;
        sorted.sort();
        assert_eq!(sorted, Rule::ALL);
    }

    #[test]
    fn test_failure_messages_default_policy() {
        let policy = Policy::default();
        assert_eq!(
            Rule::Length.failure_message(&policy),
            "Password must be exactly 16 characters long"
        );
        assert_eq!(
            Rule::Digit.failure_message(&policy),
            "Password must contain at least one number (0-9)"
        );
        assert_eq!(
            Rule::Special.failure_message(&policy),
            "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
        );
    }

    #[test]
    fn test_failure_messages_follow_policy() {
        let policy = Policy::builder()
            .required_length(10)
            .special_characters("$")
            .build()
            .unwrap();
        assert!(Rule::Length.failure_message(&policy).contains("exactly 10 characters"));
        assert!(Rule::Special.failure_message(&policy).ends_with("($)"));
    }

    #[test]
    fn test_check_dispatches_to_sections() {
        let policy = Policy::default();
        let pwd = "Ab3!Ab3!Ab3!Ab3!";
        for rule in Rule::ALL {
            assert!(rule.check(pwd, &policy), "{rule} should pass");
        }
        for rule in Rule::ALL {
            assert!(!rule.check("", &policy), "{rule} should fail on empty input");
        }
    }

    #[test]
    fn test_rule_display() {
        let names: Vec<String> = Rule::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["length", "uppercase", "lowercase", "digit", "special"]);
    }
}
