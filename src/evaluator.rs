//! Rule engine - main validation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::policy::Policy;
use crate::sections::{self, Rule};

/// A rule the password did not satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub rule: Rule,
    pub message: String,
}

/// Outcome of evaluating every rule against one password.
///
/// Failures are kept in canonical rule order. A report is valid exactly
/// when it holds no failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<RuleFailure>,
}

impl ValidationReport {
    /// Returns `true` if every rule passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Unmet rules with their messages, in canonical order.
    pub fn failures(&self) -> &[RuleFailure] {
        &self.failures
    }

    /// Failure messages in canonical order.
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }

    /// Unmet rules in canonical order.
    pub fn failed_rules(&self) -> Vec<Rule> {
        self.failures.iter().map(|f| f.rule).collect()
    }
}

/// Evaluates passwords against an immutable [`Policy`].
///
/// The engine holds no mutable state, so one instance can be shared
/// across threads and used concurrently.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    policy: Policy,
}

impl RuleEngine {
    /// Creates an engine with the default policy (16 characters, standard special set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine evaluating against `policy`.
    pub fn with_policy(policy: Policy) -> Self {
        Self { policy }
    }

    /// The policy this engine evaluates against.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Checks if the password has exactly the required number of characters.
    pub fn check_length(&self, password: &str) -> bool {
        sections::check_length(password, &self.policy)
    }

    /// Checks if the password contains an `A`-`Z`.
    pub fn check_uppercase(&self, password: &str) -> bool {
        sections::check_uppercase(password)
    }

    /// Checks if the password contains an `a`-`z`.
    pub fn check_lowercase(&self, password: &str) -> bool {
        sections::check_lowercase(password)
    }

    /// Checks if the password contains a `0`-`9`.
    pub fn check_digit(&self, password: &str) -> bool {
        sections::check_digit(password)
    }

    /// Checks if the password contains a character from the policy's special set.
    pub fn check_special(&self, password: &str) -> bool {
        sections::check_special(password, &self.policy)
    }

    /// Validates a password and returns a detailed report.
    ///
    /// # Arguments
    /// * `password` - The password to validate; never stored or logged
    ///
    /// # Returns
    /// A `ValidationReport` listing every unmet rule in canonical order.
    pub fn validate(&self, password: &SecretString) -> ValidationReport {
        self.validate_str(password.expose_secret())
    }

    /// Same as [`RuleEngine::validate`] for callers holding a plain `&str`.
    pub fn validate_str(&self, password: &str) -> ValidationReport {
        let failures: Vec<RuleFailure> = Rule::ALL
            .into_iter()
            .filter(|rule| !rule.check(password, &self.policy))
            .map(|rule| RuleFailure {
                rule,
                message: rule.failure_message(&self.policy),
            })
            .collect();

        let report = ValidationReport { failures };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            valid = report.is_valid(),
            failed = ?report.failed_rules(),
            "password validation completed"
        );

        report
    }

    /// Human-readable listing of the policy requirements.
    pub fn describe_policy(&self) -> String {
        self.policy.describe()
    }
}

/// Async version that sends the validation report via channel.
///
/// A closed receiver is not an error for the caller; the report is dropped.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    engine: &RuleEngine,
    password: &SecretString,
    tx: mpsc::Sender<ValidationReport>,
) {
    let report = engine.validate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to send validation report: {}", _e);
    }
}
