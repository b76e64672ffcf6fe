//! # JSON Export
//!
//! The sealed report serialized flat and pretty-printed. The reader
//! re-verifies the digest, so a file that parses but was edited by hand is
//! rejected with [`ExportError::Integrity`].

use std::path::{Path, PathBuf};

use aiact_integrity::SealedReport;

use crate::error::ExportError;
use crate::ReportExporter;

/// The JSON adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &SealedReport) -> Result<Vec<u8>, ExportError> {
        let mut text = to_json_pretty(report)?;
        text.push('\n');
        Ok(text.into_bytes())
    }
}

/// Pretty-printed JSON with fields in declaration order, `integrity_hash` last.
pub fn to_json_pretty(report: &SealedReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Parse a sealed report. Does not verify the digest.
pub fn from_json(text: &str) -> Result<SealedReport, ExportError> {
    Ok(serde_json::from_str(text)?)
}

/// Write `report` as `{system_id}-{YYYY-MM-DD}.json` under `dir`.
pub fn write_json(report: &SealedReport, dir: &Path) -> Result<PathBuf, ExportError> {
    JsonExporter.export(report, dir)
}

/// Read and verify a sealed report.
///
/// # Errors
///
/// `Io` if the file cannot be read, `Serialization` if it is not a sealed
/// report, `Integrity` if the digest does not match the contents.
pub fn read_json(path: &Path) -> Result<SealedReport, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let report = from_json(&text)?;
    report.verify()?;
    tracing::debug!(path = %path.display(), "sealed report verified");
    Ok(report)
}
