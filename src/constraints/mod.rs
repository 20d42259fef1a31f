//! Password policy constraints.
//!
//! Each constraint checks one aspect of a password change and reports a
//! uniform [`ValidationResult`]; the host iterates a
//! [`ConstraintRegistry`] to run every configured check. This crate ships
//! a single constraint, the breach exposure check.

mod breach;

pub use breach::BreachConstraint;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::types::ValidationResult;

/// A single named policy check.
///
/// Implementations carry their own configuration, keeping the evaluate
/// contract uniform across checks.
#[async_trait]
pub trait PasswordConstraint: Send + Sync {
    /// Stable identifier used in registries and evaluation reports.
    fn name(&self) -> &str;

    /// Checks `password`, always producing a result.
    async fn evaluate(&self, password: &SecretString) -> ValidationResult;
}

/// Ordered collection of policy checks to run against a password.
#[derive(Default)]
pub struct ConstraintRegistry {
    constraints: Vec<Box<dyn PasswordConstraint>>,
}

impl ConstraintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint; checks run in registration order.
    pub fn register(&mut self, constraint: Box<dyn PasswordConstraint>) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates constraints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PasswordConstraint> {
        self.constraints.iter().map(|constraint| constraint.as_ref())
    }
}
