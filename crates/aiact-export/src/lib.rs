//! # aiact-export — Report Export Adapters
//!
//! Writes a [`SealedReport`](aiact_integrity::SealedReport) to disk. Adapters
//! only ever receive a sealed report, so an unsealed assessment cannot be
//! exported.
//!
//! - **JSON** (`json.rs`): the sealed report pretty-printed, one file per
//!   assessment, and the matching reader that re-verifies the digest.
//! - **Text** (`text.rs`): a paginated plain-text rendering for print.
//!
//! ## File Naming
//!
//! Every adapter names its output `{system_id}-{YYYY-MM-DD}.{ext}`, the date
//! taken from the report timestamp. The same report always produces the same
//! file name.
//!
//! ## Crate Policy
//!
//! Files are written to a hidden sibling temp file and renamed into place.
//! A failed export never leaves a partial file under the final name.

pub mod error;
pub mod json;
pub mod text;

use std::io::Write;
use std::path::{Path, PathBuf};

use aiact_integrity::SealedReport;

pub use error::ExportError;
pub use json::{from_json, read_json, to_json_pretty, write_json, JsonExporter};
pub use text::{render_pages, write_text, TextExporter, DEFAULT_LINES_PER_PAGE};

/// An output format for sealed reports.
pub trait ReportExporter {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Render the report to bytes.
    ///
    /// # Errors
    ///
    /// `ExportError::Serialization` if rendering fails.
    fn render(&self, report: &SealedReport) -> Result<Vec<u8>, ExportError>;

    /// Output file name for `report`.
    fn file_name(&self, report: &SealedReport) -> String {
        file_name(report, self.extension())
    }

    /// Render and write into `dir`, returning the final path.
    ///
    /// # Errors
    ///
    /// `ExportError::Io` on any filesystem failure, `Serialization` if
    /// rendering fails.
    fn export(&self, report: &SealedReport, dir: &Path) -> Result<PathBuf, ExportError> {
        let bytes = self.render(report)?;
        let target = dir.join(self.file_name(report));
        write_atomic(dir, &target, &bytes)?;
        tracing::info!(
            system_id = %report.report().system_id,
            path = %target.display(),
            format = self.extension(),
            "report exported"
        );
        Ok(target)
    }
}

/// `{system_id}-{YYYY-MM-DD}.{extension}`.
pub fn file_name(report: &SealedReport, extension: &str) -> String {
    let inner = report.report();
    format!(
        "{}-{}.{}",
        inner.system_id,
        inner.timestamp.date_string(),
        extension
    )
}

fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = dir.join(format!(".{name}.tmp"));

    let result = (|| {
        let mut file =
            std::fs::File::create(&temp_path).map_err(|e| ExportError::io(&temp_path, e))?;
        file.write_all(bytes)
            .map_err(|e| ExportError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| ExportError::io(&temp_path, e))?;
        std::fs::rename(&temp_path, target).map_err(|e| ExportError::io(target, e))
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_deterministic() {
        let r = testutil::high_risk();
        assert_eq!(file_name(&r, "json"), "AI-Model-2026-001-2026-10-14.json");
        assert_eq!(file_name(&r, "json"), file_name(&testutil::high_risk(), "json"));
    }

    #[test]
    fn test_export_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = JsonExporter.export(&testutil::high_risk(), dir.path()).unwrap();
        assert!(path.exists());
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, ["AI-Model-2026-001-2026-10-14.json"]);
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("2026");
        let path = TextExporter::default()
            .export(&testutil::high_risk(), &nested)
            .unwrap();
        assert!(path.starts_with(&nested));
        assert_eq!(path.extension().unwrap(), "txt");
    }

    #[test]
    fn test_export_into_file_path_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        match JsonExporter.export(&testutil::high_risk(), &blocker) {
            Err(ExportError::Io { path, .. }) => assert!(path.starts_with(&blocker)),
            other => panic!("Expected Io error, got: {other:?}"),
        }
    }
}
