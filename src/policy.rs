//! Password policy configuration.
//!
//! A [`Policy`] holds the required length and the special-character set
//! every rule is evaluated against. It is built once and never mutated.

use std::fmt;
use thiserror::Error;

/// Exact number of characters a password must have by default.
pub const DEFAULT_REQUIRED_LENGTH: usize = 16;

/// Characters accepted by the special-character rule by default.
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Environment variable overriding the required length.
pub const REQUIRED_LENGTH_ENV: &str = "PWD_REQUIRED_LENGTH";

/// Environment variable overriding the special-character set.
pub const SPECIAL_CHARACTERS_ENV: &str = "PWD_SPECIAL_CHARACTERS";

const RULE_LINE: &str = "━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Required length must be greater than zero")]
    ZeroLength,
    #[error("Special character set is empty")]
    EmptySpecialSet,
    #[error("Invalid special character: {0:?}")]
    InvalidSpecialCharacter(char),
    #[error("Invalid required length: {value:?}")]
    InvalidLength { value: String },
}

/// Immutable password policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    required_length: usize,
    special_characters: String,
}

impl Policy {
    /// Starts a builder seeded with the default policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Builds a policy from the environment.
    ///
    /// Priority for each field:
    /// 1. Environment variable (`PWD_REQUIRED_LENGTH`, `PWD_SPECIAL_CHARACTERS`)
    /// 2. Built-in default
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed or
    /// describes an invalid policy.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut builder = Policy::builder();

        if let Ok(value) = std::env::var(REQUIRED_LENGTH_ENV) {
            let length = match value.trim().parse::<usize>() {
                Ok(length) => length,
                Err(_) => return Err(PolicyError::InvalidLength { value }),
            };
            builder = builder.required_length(length);
        }

        if let Ok(value) = std::env::var(SPECIAL_CHARACTERS_ENV) {
            builder = builder.special_characters(value);
        }

        let policy = builder.build()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            required_length = policy.required_length,
            special_count = policy.special_characters.chars().count(),
            "password policy loaded from environment"
        );

        Ok(policy)
    }

    pub fn required_length(&self) -> usize {
        self.required_length
    }

    /// The special-character set, in declaration order.
    pub fn special_characters(&self) -> &str {
        &self.special_characters
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(c)
    }

    /// Renders the human-readable requirements listing.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            required_length: DEFAULT_REQUIRED_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Password Requirements:")?;
        writeln!(f, "{RULE_LINE}")?;
        writeln!(f, "• Must be exactly {} characters long", self.required_length)?;
        writeln!(f, "• Must contain at least one uppercase letter (A-Z)")?;
        writeln!(f, "• Must contain at least one lowercase letter (a-z)")?;
        writeln!(f, "• Must contain at least one number (0-9)")?;
        writeln!(
            f,
            "• Must contain at least one special character: {}",
            self.special_characters
        )?;
        write!(f, "{RULE_LINE}")
    }
}

/// Builder for [`Policy`].
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    required_length: usize,
    special_characters: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            required_length: DEFAULT_REQUIRED_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

impl PolicyBuilder {
    pub fn required_length(mut self, length: usize) -> Self {
        self.required_length = length;
        self
    }

    pub fn special_characters(mut self, characters: impl AsRef<str>) -> Self {
        self.special_characters = characters.as_ref().to_string();
        self
    }

    /// Validates the configuration and freezes it into a [`Policy`].
    ///
    /// Repeated special characters are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Required length is zero
    /// - Special set is empty
    /// - Special set contains an ASCII letter, digit or whitespace
    pub fn build(self) -> Result<Policy, PolicyError> {
        if self.required_length == 0 {
            return Err(PolicyError::ZeroLength);
        }

        let mut special_characters = String::new();
        for c in self.special_characters.chars() {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                return Err(PolicyError::InvalidSpecialCharacter(c));
            }
            if !special_characters.contains(c) {
                special_characters.push(c);
            }
        }

        if special_characters.is_empty() {
            return Err(PolicyError::EmptySpecialSet);
        }

        Ok(Policy {
            required_length: self.required_length,
            special_characters,
        })
    }
}
