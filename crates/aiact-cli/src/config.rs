//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field may be omitted;
//! omitted fields fall back to the report defaults.
//!
//! ```yaml
//! owner: Compliance Team
//! system_label: Chatbot
//! sequence: 3
//! output_dir: reports
//! format: both
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aiact_classify::ReportContext;
use aiact_core::SystemId;

/// Which export adapters `assess` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sealed JSON document.
    #[default]
    Json,
    /// Paginated plain text.
    Text,
    /// Both of the above.
    Both,
}

impl OutputFormat {
    /// Whether a JSON file is written.
    pub fn json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    /// Whether a paginated text file is written.
    pub fn text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }
}

/// Settings read from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Report owner label.
    pub owner: Option<String>,
    /// Prefix of the generated system id.
    pub system_label: Option<String>,
    /// Sequence number of the generated system id.
    pub sequence: Option<u32>,
    /// Review note stamped on reports.
    pub notes: Option<String>,
    /// Directory exports are written to.
    pub output_dir: Option<PathBuf>,
    /// Default export format.
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Load and validate a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// `load(path)` when a path is given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(label) = &self.system_label {
            SystemId::parse(label).context("system_label is not a valid identifier")?;
        }
        if self.sequence == Some(0) {
            anyhow::bail!("sequence must be at least 1");
        }
        Ok(())
    }

    /// The report context with configured fields applied over the defaults.
    pub fn report_context(&self) -> ReportContext {
        let mut ctx = ReportContext::default();
        if let Some(owner) = &self.owner {
            ctx.owner.clone_from(owner);
        }
        if let Some(label) = &self.system_label {
            ctx.system_label.clone_from(label);
        }
        if let Some(seq) = self.sequence {
            ctx.sequence = seq;
        }
        if let Some(notes) = &self.notes {
            ctx.notes.clone_from(notes);
        }
        ctx
    }
}
