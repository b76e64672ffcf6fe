//! # Sealing
//!
//! ```text
//! UnsealedReport ──CanonicalBytes::new──▶ JCS bytes ──SHA-256──▶ hex
//!        │                                                        │
//!        └──────────────────────▶ SealedReport ◀──────────────────┘
//! ```
//!
//! A `SealedReport` serializes flat: every report field followed by
//! `integrity_hash`. Stripping `integrity_hash` from the JSON yields exactly
//! the value that was hashed.

use serde::{Deserialize, Serialize};

use aiact_classify::UnsealedReport;
use aiact_core::{CanonicalBytes, ContentDigest, DigestAlgorithm};

use crate::backend::{DigestBackend, Sha256Backend};
use crate::error::IntegrityError;

/// Algorithm behind `integrity_hash`. The field carries bare hex, so every
/// sealed report uses this one.
pub const SEAL_ALGORITHM: DigestAlgorithm = DigestAlgorithm::Sha256;

/// A report with a mandatory integrity digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedReport {
    #[serde(flatten)]
    report: UnsealedReport,
    integrity_hash: String,
}

impl SealedReport {
    /// The sealed report contents.
    pub fn report(&self) -> &UnsealedReport {
        &self.report
    }

    /// Lowercase hex digest of the canonical report bytes.
    pub fn integrity_hash(&self) -> &str {
        &self.integrity_hash
    }

    /// The digest as a typed value.
    ///
    /// # Errors
    ///
    /// `MalformedDigest` if the stored hash is not 64 hex characters, which
    /// only happens for a deserialized report.
    pub fn digest(&self) -> Result<ContentDigest, IntegrityError> {
        ContentDigest::from_hex(SEAL_ALGORITHM, &self.integrity_hash)
            .map_err(|e| IntegrityError::MalformedDigest(e.to_string()))
    }

    /// Recompute the digest over the embedded report and compare.
    ///
    /// # Errors
    ///
    /// `DigestMismatch` if the report was altered after sealing,
    /// `MalformedDigest` if the stored hash is not a digest at all,
    /// `HashUnavailable` if the digest cannot be recomputed.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        self.verify_with(&Sha256Backend)
    }

    /// [`verify()`](Self::verify) with an explicit backend.
    pub fn verify_with(&self, backend: &dyn DigestBackend) -> Result<(), IntegrityError> {
        let stored = self.digest()?;
        require_seal_algorithm(backend)?;
        let computed = report_digest(backend, &self.report)?;
        if computed == stored {
            return Ok(());
        }
        let computed = computed.to_hex();
        tracing::warn!(
            system_id = %self.report.system_id,
            stored = %self.integrity_hash,
            computed = %computed,
            "integrity digest mismatch"
        );
        Err(IntegrityError::DigestMismatch {
            stored: self.integrity_hash.clone(),
            computed,
        })
    }

    /// Drop the digest, returning the report for re-evaluation or re-sealing.
    pub fn into_unsealed(self) -> UnsealedReport {
        self.report
    }
}

/// Seal with SHA-256.
pub fn seal(report: UnsealedReport) -> Result<SealedReport, IntegrityError> {
    seal_with(&Sha256Backend, report)
}

/// Seal with an explicit backend.
///
/// # Errors
///
/// `HashUnavailable` if the report cannot be canonicalized or the backend
/// cannot hash. The report is consumed either way; callers that need to
/// retry should clone first.
pub fn seal_with(
    backend: &dyn DigestBackend,
    report: UnsealedReport,
) -> Result<SealedReport, IntegrityError> {
    require_seal_algorithm(backend)?;
    let digest = report_digest(backend, &report)?;
    let integrity_hash = digest.to_hex();
    tracing::info!(
        system_id = %report.system_id,
        classification = %report.classification,
        digest = %digest,
        "report sealed"
    );
    Ok(SealedReport {
        report,
        integrity_hash,
    })
}

fn require_seal_algorithm(backend: &dyn DigestBackend) -> Result<(), IntegrityError> {
    let algorithm = backend.algorithm();
    if algorithm == SEAL_ALGORITHM {
        Ok(())
    } else {
        Err(IntegrityError::HashUnavailable(format!(
            "backend produces {algorithm} digests, reports are sealed with {SEAL_ALGORITHM}"
        )))
    }
}

/// Digest of a report's canonical bytes.
pub fn report_digest(
    backend: &dyn DigestBackend,
    report: &UnsealedReport,
) -> Result<ContentDigest, IntegrityError> {
    let canonical = CanonicalBytes::new(report)
        .map_err(|e| IntegrityError::HashUnavailable(format!("canonicalization failed: {e}")))?;
    backend.digest(&canonical)
}
