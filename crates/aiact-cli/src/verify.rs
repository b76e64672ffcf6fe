//! # `aiact verify`
//!
//! Recomputes the digest of a sealed JSON report.
//!
//! Exit codes: `0` the digest matches, `2` the report was altered after
//! sealing. Unreadable or unparseable files are errors (`1`).

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aiact_integrity::IntegrityError;

/// Exit code for a report whose digest does not match its contents.
pub const EXIT_MISMATCH: u8 = 2;

/// Arguments for `aiact verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Sealed JSON report to check.
    pub file: PathBuf,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, out: &mut dyn Write) -> Result<u8> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let sealed = aiact_export::from_json(&text)
        .with_context(|| format!("{} is not a sealed report", args.file.display()))?;

    match sealed.verify() {
        Ok(()) => {
            writeln!(out, "OK {} {}", sealed.integrity_hash(), args.file.display())?;
            Ok(0)
        }
        Err(IntegrityError::DigestMismatch { stored, computed }) => {
            writeln!(out, "MISMATCH {}", args.file.display())?;
            writeln!(out, "  stored:   {stored}")?;
            writeln!(out, "  computed: {computed}")?;
            Ok(EXIT_MISMATCH)
        }
        Err(e) => Err(e).context("verification could not be completed"),
    }
}
