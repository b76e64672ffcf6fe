//! # aiact-core — Foundational Types for the Assessment Stack
//!
//! Defines the primitives every other `aiact-*` crate builds on. This crate
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!
//! 2. **`sha256_digest()` accepts only `&CanonicalBytes`.** A report can
//!    only be hashed after it has been canonicalized.
//!
//! 3. **UTC-only timestamps.** `Timestamp` is UTC with Z suffix and seconds
//!    precision, so the same instant always canonicalizes to the same bytes.
//!
//! 4. **Newtype identifiers.** `SystemId` and `SessionId` are distinct types.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aiact-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use error::{AiactError, CanonicalizationError};
pub use identity::{SessionId, SystemId};
pub use temporal::Timestamp;
