//! Breach exposure constraint - rejects passwords seen in data breaches.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::PasswordConstraint;
use crate::client::{BreachLookupClient, HttpFetcher};
use crate::types::{PolicyConfiguration, ValidationResult};

/// Rejects passwords that appear in the known-breach corpus.
///
/// An empty password passes immediately without touching the network;
/// whether empty passwords are acceptable at all belongs to other
/// validation layers. A password the lookup reports as unseen (including
/// every lookup failure, see
/// [`BreachLookupClient::lookup_occurrences`]) also passes.
pub struct BreachConstraint<F> {
    client: BreachLookupClient<F>,
    config: PolicyConfiguration,
}

impl<F: HttpFetcher> BreachConstraint<F> {
    pub fn new(client: BreachLookupClient<F>, config: PolicyConfiguration) -> Self {
        Self { client, config }
    }

    /// The configuration this constraint evaluates against.
    pub fn config(&self) -> &PolicyConfiguration {
        &self.config
    }
}

#[async_trait]
impl<F: HttpFetcher> PasswordConstraint for BreachConstraint<F> {
    fn name(&self) -> &str {
        "pwned_passwords"
    }

    async fn evaluate(&self, password: &SecretString) -> ValidationResult {
        if password.expose_secret().is_empty() {
            return ValidationResult::pass();
        }

        let occurrences = self.client.lookup_occurrences(password).await;
        if self.config.is_exposed(occurrences) {
            return ValidationResult::fail(format!(
                "Password has been exposed {occurrences} time(s) in data breaches. \
                 Choose a different password. If you've used this password on other \
                 sites, change it immediately!"
            ));
        }

        ValidationResult::pass()
    }
}
