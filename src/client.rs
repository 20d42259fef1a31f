//! Breach corpus lookup over a k-anonymity range API.
//!
//! Only the first five characters of the password digest are ever sent to
//! the remote service; the returned candidate suffixes are matched
//! locally. Lookups fail open: a transport failure, an unexpected status
//! or a malformed body all collapse to an occurrence count of `0` so that
//! an unreachable breach service never blocks a password change.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::hash::PasswordHash;
use crate::range::{self, MalformedLine};

const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Remote range requests are abandoned after this long.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Ways a single range lookup can fail.
///
/// Never escapes [`BreachLookupClient::lookup_occurrences`]; every variant
/// is logged and converted to the fail-open count of `0`.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("range request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("range request returned HTTP status {0}")]
    UnexpectedStatus(u16),
    #[error(transparent)]
    MalformedResponse(#[from] MalformedLine),
}

/// A minimal HTTP GET response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP capability used to reach the range endpoint.
///
/// Production wiring supplies [`ReqwestFetcher`]; tests substitute a
/// stub.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Issues a GET for `url`, bounded by `timeout`.
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, LookupError>;
}

/// [`HttpFetcher`] backed by a shared [`reqwest::Client`].
#[cfg(feature = "client")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

#[cfg(feature = "client")]
impl ReqwestFetcher {
    /// Wraps an existing client, keeping its connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "client")]
#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, LookupError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|error| LookupError::Transport(Box::new(error)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| LookupError::Transport(Box::new(error)))?;

        Ok(FetchResponse { status, body })
    }
}

/// Returns the range endpoint base URL.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_API_URL`
/// 2. Default `https://api.pwnedpasswords.com/range/`
pub fn api_base_url() -> String {
    std::env::var("PWD_BREACH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Maps a plaintext password to its breach occurrence count.
///
/// Stateless between calls; concurrent lookups are independent. The
/// digest is recomputed per call and only its five-character prefix is
/// put in the request URL.
pub struct BreachLookupClient<F> {
    fetcher: F,
    base_url: String,
    timeout: Duration,
}

impl<F: HttpFetcher> BreachLookupClient<F> {
    /// Creates a client against the configured range endpoint
    /// (see [`api_base_url`]).
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            base_url: api_base_url(),
            timeout: LOOKUP_TIMEOUT,
        }
    }

    /// Overrides the range endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns how many times `password` appears in the breach corpus.
    ///
    /// Never fails: any lookup error is logged and yields `0`. Callers
    /// cannot distinguish "not found in the corpus" from "lookup
    /// failed".
    pub async fn lookup_occurrences(&self, password: &SecretString) -> u64 {
        match self.try_lookup(password).await {
            Ok(count) => count,
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach lookup failed, treating password as unseen: {_error}");
                0
            }
        }
    }

    async fn try_lookup(&self, password: &SecretString) -> Result<u64, LookupError> {
        let hash = PasswordHash::digest(password);
        let url = format!("{}{}", self.base_url, hash.prefix());

        let response = self.fetcher.get(&url, self.timeout).await?;
        if response.status != 200 {
            return Err(LookupError::UnexpectedStatus(response.status));
        }

        Ok(range::find_occurrences(&response.body, hash.suffix())?.unwrap_or(0))
    }
}
