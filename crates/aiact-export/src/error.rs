use std::path::{Path, PathBuf};

use aiact_integrity::IntegrityError;
use thiserror::Error;

/// Errors raised by export adapters.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem failure. No partial file is left under the final name.
    #[error("export I/O error on {path}: {source}")]
    Io {
        /// Path being written or read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The report could not be rendered or parsed.
    #[error("report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A report read back from disk failed verification.
    #[error("report failed integrity check: {0}")]
    Integrity(#[from] IntegrityError),
}

impl ExportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
