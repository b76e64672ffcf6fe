use thiserror::Error;

/// Errors raised while sealing or verifying a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// A digest could not be computed. The report must not be exported as
    /// sealed.
    #[error("report digest unavailable: {0}")]
    HashUnavailable(String),

    /// The stored digest does not match the report contents.
    #[error("integrity digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch {
        /// Digest carried by the report.
        stored: String,
        /// Digest recomputed from the report contents.
        computed: String,
    },

    /// The stored digest is not a valid hex digest.
    #[error("malformed integrity digest: {0}")]
    MalformedDigest(String),
}
