//! Breach-exposure password validation library
//!
//! This library checks whether a password appears in a known-breach
//! corpus using a k-anonymity range query: only the first five
//! characters of the password digest are ever sent to the remote
//! service, and the returned candidate suffixes are matched locally.
//!
//! Lookups fail open: if the breach service is unreachable the password
//! is treated as unseen, so an outage never blocks a password change.
//! A count of `0` therefore means "not found or lookup failed".
//!
//! # Features
//!
//! - `client` (default): Bundles a reqwest-backed [`HttpFetcher`]
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: Custom range endpoint base URL
//!   (default: `https://api.pwnedpasswords.com/range/`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_breach::{
//!     evaluate_password, BreachConstraint, BreachLookupClient, ConstraintRegistry,
//!     PolicyConfiguration, ReqwestFetcher,
//! };
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_breach::ConfigurationError> {
//! let client = BreachLookupClient::new(ReqwestFetcher::default());
//! let config = PolicyConfiguration::new(1)?;
//!
//! let mut registry = ConstraintRegistry::new();
//! registry.register(Box::new(BreachConstraint::new(client, config)));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password(&password, &registry).await;
//!
//! println!("Passed: {}", evaluation.passed());
//! # Ok(())
//! # }
//! ```

// Internal modules
mod client;
mod constraints;
mod evaluator;
mod hash;
mod range;
mod types;

// Public API
pub use client::{
    api_base_url, BreachLookupClient, FetchResponse, HttpFetcher, LookupError, LOOKUP_TIMEOUT,
};
pub use constraints::{BreachConstraint, ConstraintRegistry, PasswordConstraint};
pub use evaluator::{evaluate_password, evaluate_password_tx, PolicyEvaluation};
pub use hash::{PasswordHash, PREFIX_LEN, SUFFIX_LEN};
pub use range::{MalformedLine, RangeEntry};
pub use types::{ConfigurationError, PolicyConfiguration, ValidationResult};

#[cfg(feature = "client")]
pub use client::ReqwestFetcher;
