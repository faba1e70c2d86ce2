//! Password policy validation library
//!
//! This library checks a candidate password against a fixed set of
//! length and character-class rules and reports every unmet rule.
//!
//! # Features
//!
//! - `async` (default): Enables sending reports over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive `pwd-validator` binary
//!
//! # Environment Variables
//!
//! Read by [`Policy::from_env`]:
//!
//! - `PWD_REQUIRED_LENGTH`: Exact password length (default: `16`)
//! - `PWD_SPECIAL_CHARACTERS`: Accepted special characters
//!   (default: `!@#$%^&*()_+-=[]{}|;:,.<>?`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{Rule, RuleEngine};
//! use secrecy::SecretString;
//!
//! let engine = RuleEngine::new();
//! println!("{}", engine.describe_policy());
//!
//! let password = SecretString::new("aaaaaaaaaaaaaaaa".to_string().into());
//! let report = engine.validate(&password);
//!
//! assert!(!report.is_valid());
//! assert_eq!(
//!     report.failed_rules(),
//!     vec![Rule::Uppercase, Rule::Digit, Rule::Special]
//! );
//! ```

// Internal modules
mod evaluator;
mod policy;
mod sections;

#[cfg(test)]
mod proptest;

// Public API
pub use evaluator::{RuleEngine, RuleFailure, ValidationReport};
pub use policy::{
    DEFAULT_REQUIRED_LENGTH, DEFAULT_SPECIAL_CHARACTERS, Policy, PolicyBuilder, PolicyError,
    REQUIRED_LENGTH_ENV, SPECIAL_CHARACTERS_ENV,
};
pub use sections::Rule;

#[cfg(feature = "async")]
pub use evaluator::validate_password_tx;
