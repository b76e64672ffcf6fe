//! # `aiact assess`
//!
//! Runs one questionnaire session, classifies the answers, seals the report
//! and exports it.
//!
//! ```bash
//! # Interactive, answers read from stdin:
//! aiact assess
//!
//! # Non-interactive:
//! aiact assess --answer start=provider --answer scope_location=eu_market \
//!     --answer system_purpose=biometrics --format both --output-dir reports
//! ```
//!
//! With `--answer`, the engine is driven along the path the supplied
//! answers select. Every question on that path needs an answer; answers to
//! questions off the path are ignored with a warning.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aiact_classify::Evaluator;
use aiact_export::{JsonExporter, ReportExporter, TextExporter};
use aiact_integrity::{seal, SealedReport};
use aiact_questionnaire::{Answer, Question, Step, Traversal};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for `aiact assess`.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Answer as `question_id=value`. Repeatable. Skips the interactive prompt.
    #[arg(long = "answer", value_name = "ID=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,

    /// Directory to write exports to. Overrides the config file.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Export format. Overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

fn parse_answer(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() && !value.trim().is_empty() => {
            Ok((id.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected ID=VALUE, got {s:?}")),
    }
}

/// Execute the assess subcommand.
pub fn run_assess(
    args: &AssessArgs,
    config: &CliConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<u8> {
    let mut traversal = Traversal::start();
    tracing::info!(session = %traversal.session(), "assessment started");

    if args.answers.is_empty() {
        run_interactive(&mut traversal, input, out)?;
    } else {
        apply_answers(&mut traversal, &args.answers)?;
    }

    let report = Evaluator::with_context(config.report_context()).evaluate(traversal.answers());
    let sealed = seal(report).context("failed to seal report")?;

    let dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let format = args.format.or(config.format).unwrap_or_default();
    let written = export(&sealed, &dir, format)?;

    print_session(traversal.log(), out)?;
    print_result(&sealed, &written, out)?;
    Ok(0)
}

/// Drive `traversal` from pre-supplied answers until it finishes.
pub fn apply_answers(traversal: &mut Traversal<'_>, answers: &[(String, String)]) -> Result<()> {
    let supplied: HashMap<&str, &str> = answers
        .iter()
        .map(|(id, value)| (id.as_str(), value.as_str()))
        .collect();

    // Each accepted answer moves one edge, so a path longer than the
    // catalog has revisited a question with the same answer.
    let limit = traversal.catalog().len();
    let mut steps = 0;
    while !traversal.is_finished() {
        if steps == limit {
            anyhow::bail!("supplied answers do not lead to the end of the questionnaire");
        }
        let id = traversal.current_id();
        let value = supplied
            .get(id)
            .with_context(|| format!("no answer supplied for question {id:?}"))?;
        traversal.submit_value(value)?;
        steps += 1;
    }

    for id in supplied.keys() {
        if !traversal.answers().contains(id) {
            tracing::warn!(question = id, "answer ignored: question not on the answered path");
        }
    }
    Ok(())
}

fn run_interactive(
    traversal: &mut Traversal<'_>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    writeln!(out, "EU AI Act risk assessment. Answer with a number or value; 'back' returns to the previous question.")?;
    let mut line = String::new();
    loop {
        let question = match traversal.current()? {
            Step::Finished => return Ok(()),
            Step::Question(q) => q,
        };
        render_question(question, traversal.progress(), out)?;

        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before the questionnaire was finished");
        }
        let reply = line.trim();

        if reply.eq_ignore_ascii_case("back") {
            match previous_question(traversal) {
                Some(id) => {
                    traversal.revisit(id)?;
                }
                None => writeln!(out, "Already at the first question.")?,
            }
            continue;
        }

        let value = resolve_reply(question, reply);
        match value.map(|v| traversal.submit_value(v)) {
            Some(Ok(_)) => {}
            Some(Err(e)) => writeln!(out, "{e}")?,
            None => writeln!(out, "Not an option: {reply:?}")?,
        }
    }
}

fn previous_question(traversal: &Traversal<'_>) -> Option<&'static str> {
    let history = traversal.history();
    let pos = history.iter().position(|&h| h == traversal.current_id())?;
    pos.checked_sub(1).map(|p| history[p])
}

/// Map a reply to an option value: a 1-based index or the value token.
fn resolve_reply<'q>(question: &'q Question, reply: &str) -> Option<&'q str> {
    if let Ok(n) = reply.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .map(|o| o.value);
    }
    question.option(reply).map(|o| o.value)
}

fn render_question(question: &Question, progress: u8, out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "[{progress:>3}%] {}: {}", question.category, question.prompt)?;
    for (i, o) in question.options.iter().enumerate() {
        match o.legal_reference {
            Some(r) => writeln!(out, "  {}) {} ({r})", i + 1, o.label)?,
            None => writeln!(out, "  {}) {}", i + 1, o.label)?,
        }
        if let Some(hint) = o.hint {
            writeln!(out, "       {hint}")?;
        }
    }
    Ok(())
}

fn export(sealed: &SealedReport, dir: &std::path::Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if format.json() {
        written.push(
            JsonExporter
                .export(sealed, dir)
                .context("JSON export failed")?,
        );
    }
    if format.text() {
        written.push(
            TextExporter::default()
                .export(sealed, dir)
                .context("text export failed")?,
        );
    }
    Ok(written)
}

/// Every accepted submission, revisited ones included, in the order given.
fn print_session(log: &[Answer], out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Session:")?;
    for a in log {
        writeln!(out, "  {} = {} -> {}", a.question_id, a.value, a.next)?;
    }
    Ok(())
}

fn print_result(sealed: &SealedReport, written: &[PathBuf], out: &mut dyn Write) -> Result<()> {
    let r = sealed.report();
    writeln!(out)?;
    writeln!(out, "Classification: {}", r.classification)?;
    writeln!(out, "Risk:           {}/100 ({})", r.risk_score, r.risk_level.as_str())?;
    writeln!(out, "System:         {}", r.system_id)?;
    writeln!(out, "Summary:        {}", r.summary)?;
    if !r.obligations.is_empty() {
        writeln!(out, "Obligations:")?;
        for o in &r.obligations {
            writeln!(out, "  - {}", o.name)?;
        }
    }
    writeln!(out, "References:     {}", r.references.join(", "))?;
    writeln!(out, "Integrity:      {}", sealed.integrity_hash())?;
    for path in written {
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}

/// Parse `--answer` pairs without clap, for callers building args by hand.
pub fn answers_from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Result<Vec<(String, String)>> {
    pairs
        .into_iter()
        .map(|p| parse_answer(p).map_err(anyhow::Error::msg))
        .collect()
}
