//! # aiact-questionnaire — Decision Tree and Traversal
//!
//! - **Question** (`question.rs`): questions, options, and the `NextStep`
//!   edge type (`Question(id)` or the `finish` sentinel).
//!
//! - **Catalog** (`catalog.rs`): the fixed question set, held as
//!   process-wide immutable state and indexed by id for O(1) lookup.
//!
//! - **Answers** (`answers.rs`): the `AnswerMap` accumulated by a run.
//!
//! - **Traversal** (`traversal.rs`): the per-session engine that turns a
//!   sequence of chosen options into a terminal state.
//!
//! ## Traversal
//!
//! ```text
//! start ──▶ scope_location ──▶ system_purpose ──▶ function_type ──▶ finish
//!                 │                  │
//!                 ▼                  ▼
//!               finish             finish
//! ```
//!
//! The engine advances by exactly one edge per submitted answer, so a cycle
//! in the graph can never make it loop on its own.

pub mod answers;
pub mod catalog;
pub mod error;
pub mod question;
pub mod traversal;

pub use answers::AnswerMap;
pub use catalog::{ids, Catalog};
pub use error::QuestionnaireError;
pub use question::{Answer, Category, NextStep, Question, QuestionOption};
pub use traversal::{Step, Traversal};
