//! # Identifier Newtypes
//!
//! `SystemId` names the assessed AI system on a report. `SessionId`
//! correlates the log lines of one questionnaire run. Neither can be
//! passed where the other is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AiactError;

/// Identifier printed on a report, e.g. `AI-Model-2026-001`.
///
/// Generated from a label, the assessment year, and a sequence number.
/// Uniqueness across runs is not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(String);

impl SystemId {
    /// Build `{label}-{year}-{sequence:03}`.
    pub fn generate(label: &str, year: i32, sequence: u32) -> Self {
        Self(format!("{label}-{year}-{sequence:03}"))
    }

    /// Wrap an existing identifier string.
    ///
    /// # Errors
    ///
    /// The identifier ends up in export file names, so it must be non-empty
    /// and contain only ASCII alphanumerics, `-`, `_` or `.`.
    pub fn parse(s: &str) -> Result<Self, AiactError> {
        let valid = !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(AiactError::Validation(format!("invalid system id: {s:?}")));
        }
        Ok(Self(s.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one traversal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}
