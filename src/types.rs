//! Shared policy types.

use thiserror::Error;

/// Error raised when a policy is configured with invalid values.
///
/// Configuration is validated when it is built, so evaluation never has
/// to deal with a bad threshold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("the minimum occurrences must be a positive number")]
    NonPositiveMinOccurrences,
}

/// Configuration for the breach exposure constraint.
///
/// `min_occurrences` is the number of breach occurrences at which a
/// password is considered exposed. Historically the threshold was stored
/// and shown in policy summaries while *any* occurrence failed
/// validation; that behavior is kept as the default. Call
/// [`enforce_min_occurrences`](Self::enforce_min_occurrences) to make the
/// threshold actually gate the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfiguration {
    min_occurrences: u64,
    enforce_min_occurrences: bool,
}

impl PolicyConfiguration {
    /// Creates a configuration with the given occurrence threshold.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NonPositiveMinOccurrences`] if
    /// `min_occurrences` is zero.
    pub fn new(min_occurrences: u64) -> Result<Self, ConfigurationError> {
        if min_occurrences == 0 {
            return Err(ConfigurationError::NonPositiveMinOccurrences);
        }
        Ok(Self {
            min_occurrences,
            enforce_min_occurrences: false,
        })
    }

    /// Compares occurrence counts against the configured threshold
    /// instead of failing on any occurrence at all.
    pub fn enforce_min_occurrences(mut self) -> Self {
        self.enforce_min_occurrences = true;
        self
    }

    /// The configured occurrence threshold.
    pub fn min_occurrences(&self) -> u64 {
        self.min_occurrences
    }

    /// Whether `count` breach occurrences fail validation under this
    /// configuration.
    pub fn is_exposed(&self, count: u64) -> bool {
        if self.enforce_min_occurrences {
            count >= self.min_occurrences
        } else {
            count > 0
        }
    }

    /// One-line description for policy summaries.
    pub fn summary(&self) -> String {
        format!("Minimum Pwned Password occurrences: {}", self.min_occurrences)
    }
}

impl Default for PolicyConfiguration {
    fn default() -> Self {
        Self {
            min_occurrences: 1,
            enforce_min_occurrences: false,
        }
    }
}

/// Outcome of a single constraint evaluation.
///
/// Immutable once produced; a failed result always carries a user-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    passed: bool,
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
        }
    }

    /// A failing result with a user-facing message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
        }
    }

    /// `true` when the password satisfied the constraint.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
