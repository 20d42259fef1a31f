//! Policy evaluation - runs every registered constraint.

use secrecy::SecretString;
use tokio::sync::mpsc;

use crate::constraints::ConstraintRegistry;
use crate::types::ValidationResult;

/// Aggregated outcome of running a registry against one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEvaluation {
    results: Vec<(String, ValidationResult)>,
}

impl PolicyEvaluation {
    /// `true` when every constraint passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|(_, result)| result.passed())
    }

    /// Messages of the failed constraints, in registration order.
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|(_, result)| !result.passed())
            .filter_map(|(_, result)| result.message())
            .collect()
    }

    /// Per-constraint results, keyed by constraint name.
    pub fn results(&self) -> &[(String, ValidationResult)] {
        &self.results
    }
}

/// Evaluates `password` against every constraint in `registry`.
///
/// Constraints run in registration order; each produces a result even
/// when an earlier one failed, so the host can report every violation at
/// once.
pub async fn evaluate_password(
    password: &SecretString,
    registry: &ConstraintRegistry,
) -> PolicyEvaluation {
    let mut results = Vec::with_capacity(registry.len());

    for constraint in registry.iter() {
        let result = constraint.evaluate(password).await;

        #[cfg(feature = "tracing")]
        if !result.passed() {
            tracing::debug!("Password constraint failed: {}", constraint.name());
        }

        results.push((constraint.name().to_string(), result));
    }

    PolicyEvaluation { results }
}

/// Async variant that sends the evaluation result via channel.
pub async fn evaluate_password_tx(
    password: &SecretString,
    registry: &ConstraintRegistry,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    let evaluation = evaluate_password(password, registry).await;

    if let Err(_error) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send policy evaluation result: {_error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::PasswordConstraint;
    use async_trait::async_trait;

    struct AlwaysPass;

    #[async_trait]
    impl PasswordConstraint for AlwaysPass {
        fn name(&self) -> &str {
            "always_pass"
        }

        async fn evaluate(&self, _password: &SecretString) -> ValidationResult {
            ValidationResult::pass()
        }
    }

    struct AlwaysFail(&'static str);

    #[async_trait]
    impl PasswordConstraint for AlwaysFail {
        fn name(&self) -> &str {
            "always_fail"
        }

        async fn evaluate(&self, _password: &SecretString) -> ValidationResult {
            ValidationResult::fail(self.0)
        }
    }

    #[tokio::test]
    async fn test_evaluate_empty_registry_passes() {
        let registry = ConstraintRegistry::new();
        let pwd = SecretString::new("MyPass123!".to_string().into());

        let evaluation = evaluate_password(&pwd, &registry).await;
        assert!(evaluation.passed());
        assert!(evaluation.failures().is_empty());
    }

    #[tokio::test]
    async fn test_evaluate_runs_every_constraint() {
        let mut registry = ConstraintRegistry::new();
        registry.register(Box::new(AlwaysFail("first reason")));
        registry.register(Box::new(AlwaysPass));
        registry.register(Box::new(AlwaysFail("second reason")));

        let pwd = SecretString::new("MyPass123!".to_string().into());
        let evaluation = evaluate_password(&pwd, &registry).await;

        assert!(!evaluation.passed());
        assert_eq!(evaluation.failures(), ["first reason", "second reason"]);
        assert_eq!(evaluation.results().len(), 3);
        assert_eq!(evaluation.results()[1].0, "always_pass");
    }

    #[tokio::test]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut registry = ConstraintRegistry::new();
        registry.register(Box::new(AlwaysPass));

        let pwd = SecretString::new("MyPass123!".to_string().into());
        evaluate_password_tx(&pwd, &registry, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.passed());
    }
}
