//! # Compliance Report
//!
//! `UnsealedReport` is the evaluator's output. It has no digest field at
//! all; sealing produces a separate type in `aiact-integrity`. Apart from
//! obligation statuses, a report is not modified after evaluation.

use serde::{Deserialize, Serialize};

use aiact_core::{SystemId, Timestamp};

use crate::classification::{Classification, RiskLevel};

/// Report schema version stamped on every report.
pub const SCHEMA_VERSION: &str = "2.0";

const DEFAULT_OWNER: &str = "Data Protection Office";
const DEFAULT_SYSTEM_LABEL: &str = "AI-Model";
const DEFAULT_NOTES: &str =
    "Initial automated assessment. Manual review and status updates required for obligations.";

/// Progress of an obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObligationStatus {
    /// No work started. Every evaluated obligation starts here.
    #[default]
    NotStarted,
    /// Work under way.
    InProgress,
    /// Done.
    Complete,
}

impl std::fmt::Display for ObligationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// A named compliance duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    /// Duty description.
    pub name: String,
    /// Current status.
    pub status: ObligationStatus,
}

impl Obligation {
    /// A not-started obligation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ObligationStatus::NotStarted,
        }
    }

    /// Update the status.
    pub fn set_status(&mut self, status: ObligationStatus) {
        self.status = status;
    }
}

/// Contextual fields stamped on every report, independent of the rule
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Owner label.
    pub owner: String,
    /// Prefix of the generated system id.
    pub system_label: String,
    /// Sequence number of the generated system id.
    pub sequence: u32,
    /// Review reminder note.
    pub notes: String,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            system_label: DEFAULT_SYSTEM_LABEL.to_string(),
            sequence: 1,
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}

impl ReportContext {
    /// System id for an assessment made at `timestamp`.
    pub fn system_id(&self, timestamp: &Timestamp) -> SystemId {
        SystemId::generate(&self.system_label, timestamp.year(), self.sequence)
    }
}

/// A finished assessment without an integrity digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsealedReport {
    /// When the assessment was evaluated.
    pub timestamp: Timestamp,
    /// Report schema version.
    pub version: String,
    /// Generated system identifier.
    pub system_id: SystemId,
    /// Classification outcome.
    pub classification: Classification,
    /// Rule-attached risk score (0-100).
    pub risk_score: u8,
    /// Rule-attached risk level.
    pub risk_level: RiskLevel,
    /// Human-readable summary.
    pub summary: String,
    /// Owner label.
    pub owner: String,
    /// Obligations in rule order.
    pub obligations: Vec<Obligation>,
    /// Legal references in rule order.
    pub references: Vec<String>,
    /// Free-text notes.
    pub notes: String,
}

impl UnsealedReport {
    /// Mutable access to an obligation by position.
    pub fn obligation_mut(&mut self, index: usize) -> Option<&mut Obligation> {
        self.obligations.get_mut(index)
    }
}
