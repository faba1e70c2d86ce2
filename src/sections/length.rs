//! Length section - checks the password has exactly the required length.

use crate::policy::Policy;

/// Checks if the password has exactly `policy.required_length()` characters.
///
/// Length is counted in `char`s, so multi-byte characters count once.
pub fn check_length(password: &str, policy: &Policy) -> bool {
    password.chars().count() == policy.required_length()
}
