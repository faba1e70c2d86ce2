//! Special character section - checks membership in the policy's set.

use crate::policy::Policy;

/// Checks if the password contains at least one character from
/// `policy.special_characters()`.
///
/// Characters outside the set (whitespace, other symbols) never count.
pub fn check_special(password: &str, policy: &Policy) -> bool {
    password.chars().any(|c| policy.is_special(c))
}
