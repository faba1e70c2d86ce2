//! Character variety section - checks for uppercase, lowercase and digits.
//!
//! Only the ASCII ranges count; other letters and digits are ignored.

/// Checks if the password contains at least one `A`-`Z`.
pub fn check_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks if the password contains at least one `a`-`z`.
pub fn check_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks if the password contains at least one `0`-`9`.
pub fn check_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
