//! # `aiact questions`
//!
//! Prints the built-in catalog, as an indented outline or as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use aiact_questionnaire::Catalog;

/// Arguments for `aiact questions`.
#[derive(Args, Debug)]
pub struct QuestionsArgs {
    /// Emit the catalog as JSON instead of an outline.
    #[arg(long)]
    pub json: bool,
}

/// Execute the questions subcommand.
pub fn run_questions(args: &QuestionsArgs, out: &mut dyn Write) -> Result<u8> {
    let catalog = Catalog::global();
    catalog.validate().context("built-in catalog failed validation")?;

    if args.json {
        let text = serde_json::to_string_pretty(catalog.questions())?;
        writeln!(out, "{text}")?;
        return Ok(0);
    }

    for q in catalog.questions() {
        writeln!(out, "{} [{}]", q.id, q.category)?;
        writeln!(out, "  {}", q.prompt)?;
        for o in &q.options {
            let reference = o
                .legal_reference
                .map(|r| format!(" ({r})"))
                .unwrap_or_default();
            writeln!(out, "    {:<20} -> {:<16} {}{}", o.value, o.next.as_str(), o.label, reference)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Total: {} questions, start at {:?}", catalog.len(), catalog.start_id())?;
    Ok(0)
}
