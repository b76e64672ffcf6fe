//! # aiact-cli — AI Act Risk Assessment CLI
//!
//! Provides the `aiact` command-line interface over the questionnaire,
//! evaluator, integrity and export crates.
//!
//! ## Subcommands
//!
//! - `aiact questions` — Print the question catalog.
//! - `aiact assess` — Run a session, classify, seal and export.
//! - `aiact verify` — Check the digest of an exported JSON report.
//!
//! ```bash
//! aiact questions --json
//! aiact assess --answer start=provider --answer scope_location=outside_eu
//! aiact verify AI-Model-2026-001-2026-10-14.json
//! ```
//!
//! Handlers write user output to the writer they are given and return an
//! exit code. Logs go to stderr.

pub mod assess;
pub mod config;
pub mod questions;
pub mod verify;

pub use config::{CliConfig, OutputFormat};
