//! # aiact-classify — Classification Evaluator
//!
//! Maps a completed [`AnswerMap`](aiact_questionnaire::AnswerMap) to an
//! [`UnsealedReport`]: a classification, a risk score and level, a summary,
//! obligations, and legal references.
//!
//! - **Classification** (`classification.rs`): the five mutually exclusive
//!   outcomes and the four risk levels.
//! - **Rules** (`rules.rs`): the ordered rule table. Each rule is a
//!   predicate over the answers paired with a fixed outcome.
//! - **Report** (`report.rs`): `UnsealedReport`, `Obligation`, and the
//!   contextual fields stamped on every report.
//! - **Evaluator** (`evaluator.rs`): first-match evaluation of the table.
//!
//! ## Precedence
//!
//! | Order | Classification | Score | Level |
//! |-------|----------------|-------|-------|
//! | 1 | Out-of-Scope | 0 | N/A |
//! | 2 | Prohibited | 95 | High |
//! | 3 | High-Risk | 82 | High |
//! | 4 | In-Scope | 45 | Medium |
//! | fallback | Minimal-Risk | 10 | Low |
//!
//! Rules are never combined. Scores are constants attached to each rule,
//! not computed from the answers.
//!
//! Evaluation is total: a missing answer simply fails to match, so any
//! answer map, including an empty one, yields a report.

pub mod classification;
pub mod evaluator;
pub mod report;
pub mod rules;

pub use classification::{Classification, RiskLevel};
pub use evaluator::{evaluate, evaluate_with, Evaluator};
pub use report::{Obligation, ObligationStatus, ReportContext, UnsealedReport, SCHEMA_VERSION};
pub use rules::{Predicate, Rule, RuleOutcome, RuleSet};
