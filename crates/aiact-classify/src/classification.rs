use serde::{Deserialize, Serialize};

/// The regulatory classification of an assessed system. Exactly one per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Outside the territorial scope of the regulation.
    #[serde(rename = "Out-of-Scope")]
    OutOfScope,
    /// A prohibited practice.
    #[serde(rename = "Prohibited")]
    Prohibited,
    /// A high-risk system under Annex III.
    #[serde(rename = "High-Risk")]
    HighRisk,
    /// In scope, not high-risk or prohibited.
    #[serde(rename = "In-Scope")]
    InScope,
    /// Minimal or no risk.
    #[serde(rename = "Minimal-Risk")]
    MinimalRisk,
}

impl Classification {
    /// All classifications in precedence order.
    pub fn all() -> &'static [Classification] {
        &[
            Self::OutOfScope,
            Self::Prohibited,
            Self::HighRisk,
            Self::InScope,
            Self::MinimalRisk,
        ]
    }

    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfScope => "Out-of-Scope",
            Self::Prohibited => "Prohibited",
            Self::HighRisk => "High-Risk",
            Self::InScope => "In-Scope",
            Self::MinimalRisk => "Minimal-Risk",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse risk level. Fixed per rule alongside the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// High risk.
    High,
    /// Medium risk.
    Medium,
    /// Low risk.
    Low,
    /// Not applicable (out of scope).
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl RiskLevel {
    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
