//! # aiact-integrity — Report Sealing
//!
//! Turns an [`UnsealedReport`](aiact_classify::UnsealedReport) into a
//! [`SealedReport`] by attaching a SHA-256 digest of its canonical bytes.
//!
//! - **Backend** (`backend.rs`): the `DigestBackend` seam and the default
//!   `Sha256Backend`.
//! - **Seal** (`seal.rs`): `seal()`, `SealedReport`, and verification.
//!
//! ## Security Invariant
//!
//! The digest never covers itself. `UnsealedReport` has no digest field,
//! and the digest is always computed over the `UnsealedReport` embedded in
//! a `SealedReport`, never over the sealed value.
//!
//! Sealing either returns a complete `SealedReport` or an error. There is
//! no placeholder digest and no partially populated result.

pub mod backend;
pub mod error;
pub mod seal;

pub use backend::{DigestBackend, Sha256Backend};
pub use error::IntegrityError;
pub use seal::{report_digest, seal, seal_with, SealedReport, SEAL_ALGORITHM};
