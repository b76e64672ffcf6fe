//! # Text Export
//!
//! A printable rendering of a sealed report: title, generation time,
//! classification, summary, obligations, references, notes and the
//! integrity digest. Lines are word-wrapped to a fixed width and grouped
//! into pages of at most `lines_per_page` lines, separated by form feeds.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use aiact_integrity::SealedReport;

use crate::error::ExportError;
use crate::ReportExporter;

/// Page length used by [`TextExporter::default()`].
pub const DEFAULT_LINES_PER_PAGE: usize = 54;

/// Line width used by [`TextExporter::default()`].
pub const DEFAULT_WIDTH: usize = 78;

const MIN_WIDTH: usize = 16;
const TITLE: &str = "EU AI Act Compliance Report";
const PAGE_BREAK: &str = "\u{000C}\n";

/// The paginated text adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExporter {
    width: usize,
    lines_per_page: usize,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_LINES_PER_PAGE)
    }
}

impl TextExporter {
    /// Width is clamped to at least 16 columns, page length to at least one line.
    pub fn new(width: usize, lines_per_page: usize) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Maximum line width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum number of lines on one page.
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// The report as pages of wrapped lines.
    pub fn pages(&self, report: &SealedReport) -> Vec<Vec<String>> {
        render_pages(report, self.width, self.lines_per_page)
    }
}

impl ReportExporter for TextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &SealedReport) -> Result<Vec<u8>, ExportError> {
        let pages = self.pages(report);
        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push_str(PAGE_BREAK);
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
        }
        Ok(out.into_bytes())
    }
}

/// Write `report` as `{system_id}-{YYYY-MM-DD}.txt` under `dir` with the
/// default layout.
pub fn write_text(report: &SealedReport, dir: &Path) -> Result<PathBuf, ExportError> {
    TextExporter::default().export(report, dir)
}

/// Lay out `report` into pages. A page never starts with a blank line.
pub fn render_pages(report: &SealedReport, width: usize, lines_per_page: usize) -> Vec<Vec<String>> {
    let width = width.max(MIN_WIDTH);
    let lines_per_page = lines_per_page.max(1);

    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut page: Vec<String> = Vec::new();
    for line in layout(report, width) {
        if page.len() == lines_per_page {
            pages.push(std::mem::take(&mut page));
        }
        if page.is_empty() && line.is_empty() {
            continue;
        }
        page.push(line);
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

fn layout(sealed: &SealedReport, width: usize) -> Vec<String> {
    let r = sealed.report();
    let mut lines = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(format!("Generated: {}", r.timestamp.to_iso8601()));
    lines.push(String::new());
    lines.extend(wrap(&format!("Result: {}", r.classification), width, ""));
    lines.extend(wrap(
        &format!("Risk: {}/100 ({})", r.risk_score, r.risk_level.as_str()),
        width,
        "",
    ));
    lines.extend(wrap(&format!("System: {}", r.system_id), width, ""));
    lines.extend(wrap(&format!("Owner: {}", r.owner), width, ""));
    lines.push(String::new());

    lines.push("Summary".to_string());
    lines.extend(wrap(&r.summary, width, ""));

    if !r.obligations.is_empty() {
        lines.push(String::new());
        lines.push("Potential Obligations".to_string());
        for o in &r.obligations {
            lines.extend(wrap(&format!("- [{}] {}", o.status, o.name), width, "  "));
        }
    }

    if !r.references.is_empty() {
        lines.push(String::new());
        lines.push("Relevant Legal References".to_string());
        lines.extend(wrap(&r.references.join(", "), width, ""));
    }

    if !r.notes.is_empty() {
        lines.push(String::new());
        lines.push("Notes".to_string());
        lines.extend(wrap(&r.notes, width, ""));
    }

    lines.push(String::new());
    lines.push("Integrity (SHA-256)".to_string());
    lines.extend(wrap(sealed.integrity_hash(), width, ""));
    lines
}

/// Greedy word wrap on ASCII spaces. Continuation lines take `indent`.
/// Words longer than the available width are split.
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(width)
        .subsequent_indent(indent)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_wrap_respects_width() {
        let text = "Implement a risk management system (Article 9) and keep it updated.";
        for line in wrap(text, 20, "  ") {
            assert!(line.chars().count() <= 20, "{line:?}");
        }
        assert_eq!(wrap("", 20, ""), Vec::<String>::new());
    }

    #[test]
    fn test_wrap_indents_continuations() {
        let lines = wrap("- [not-started] alpha beta gamma delta", 20, "  ");
        assert_eq!(lines[0], "- [not-started]");
        assert!(lines[1..].iter().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn test_wrap_keeps_hyphenated_tokens_whole() {
        let lines = wrap("- [not-started] Ensure human oversight (Article 14)", 24, "  ");
        assert_eq!(lines[0], "- [not-started] Ensure");
        assert!(lines.iter().all(|l| !l.ends_with('-')));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let hash = "a".repeat(40);
        let lines = wrap(&hash, 16, "");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.concat(), hash);
    }

    #[test]
    fn test_page_length_bound() {
        let r = testutil::high_risk();
        for per_page in [1, 3, 7, 54] {
            let pages = render_pages(&r, 40, per_page);
            assert!(!pages.is_empty());
            assert!(pages.iter().all(|p| !p.is_empty() && p.len() <= per_page));
            assert!(pages.iter().all(|p| !p[0].is_empty()));
        }
    }

    #[test]
    fn test_content_sections() {
        let r = testutil::high_risk();
        let text = String::from_utf8(TextExporter::default().render(&r).unwrap()).unwrap();
        assert!(text.starts_with(TITLE));
        assert!(text.contains("Result: High-Risk"));
        assert!(text.contains("Risk: 82/100 (High)"));
        assert!(text.contains("Potential Obligations"));
        assert!(text.contains("- [not-started] "));
        assert!(text.contains("Annex III, Article 6"));
        assert!(text.contains(r.integrity_hash()));
    }

    #[test]
    fn test_out_of_scope_omits_obligations() {
        let r = testutil::sealed(&[("scope_location", "outside_eu")]);
        let text = String::from_utf8(TextExporter::default().render(&r).unwrap()).unwrap();
        assert!(text.contains("Result: Out-of-Scope"));
        assert!(!text.contains("Potential Obligations"));
        assert!(text.contains("Article 2"));
    }

    #[test]
    fn test_small_pages_use_form_feeds() {
        let r = testutil::high_risk();
        let exporter = TextExporter::new(40, 5);
        let pages = exporter.pages(&r);
        let text = String::from_utf8(exporter.render(&r).unwrap()).unwrap();
        assert_eq!(text.matches('\u{000C}').count(), pages.len() - 1);
    }

    #[test]
    fn test_write_text_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_text(&testutil::high_risk(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "AI-Model-2026-001-2026-10-14.txt");
    }

    #[test]
    fn test_new_clamps_layout() {
        let e = TextExporter::new(0, 0);
        assert_eq!(e.width(), MIN_WIDTH);
        assert_eq!(e.lines_per_page(), 1);
    }
}
