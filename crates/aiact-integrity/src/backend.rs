//! # Digest Backends
//!
//! `DigestBackend` accepts only `&CanonicalBytes`, so no backend can be
//! handed a non-canonical encoding of a report.

use aiact_core::{sha256_digest, CanonicalBytes, ContentDigest, DigestAlgorithm};

use crate::error::IntegrityError;

/// A source of content digests.
pub trait DigestBackend {
    /// Algorithm this backend produces.
    fn algorithm(&self) -> DigestAlgorithm;

    /// Digest `data`.
    ///
    /// # Errors
    ///
    /// `IntegrityError::HashUnavailable` if the backend cannot hash.
    fn digest(&self, data: &CanonicalBytes) -> Result<ContentDigest, IntegrityError>;
}

/// SHA-256 via the `sha2` crate. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Backend;

impl DigestBackend for Sha256Backend {
    fn algorithm(&self) -> DigestAlgorithm {
        DigestAlgorithm::Sha256
    }

    fn digest(&self, data: &CanonicalBytes) -> Result<ContentDigest, IntegrityError> {
        Ok(sha256_digest(data))
    }
}
