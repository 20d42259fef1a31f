//! Password digest computation for range queries.

use data_encoding::HEXUPPER;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the digest prefix sent to the range endpoint.
pub const PREFIX_LEN: usize = 5;

/// Length of the digest suffix kept for local matching.
pub const SUFFIX_LEN: usize = 35;

/// A password digest split for a k-anonymity range query.
///
/// The SHA-1 digest of the password, formatted as 40 uppercase hex
/// characters and split in two: the `prefix` is the only part that ever
/// leaves the process (it is the range query key), the `suffix` stays
/// local and is compared against the candidates the endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    prefix: String,
    suffix: String,
}

impl PasswordHash {
    /// Digests `password` and splits the result into query prefix and
    /// local suffix.
    ///
    /// The digest is recomputed on every call; neither the plaintext nor
    /// the full hash is retained anywhere.
    pub fn digest(password: &SecretString) -> Self {
        let hash = HEXUPPER.encode(Sha1::digest(password.expose_secret().as_bytes()).as_slice());
        let (prefix, suffix) = hash.split_at(PREFIX_LEN);
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The five-character range query key.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The 35-character remainder used for local candidate matching.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}
