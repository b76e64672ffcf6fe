//! # Question Data Model
//!
//! Questions and options are plain immutable data. All text fields are
//! `&'static str` because the catalog is compiled into the binary.

use serde::{Serialize, Serializer};

/// Sentinel written in place of a question id when an option ends the run.
pub const FINISH: &str = "finish";

/// Thematic grouping of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Who the respondent is relative to the system.
    Entity,
    /// Territorial scope.
    Scope,
    /// Risk-tier determining questions.
    Risk,
    /// Transparency duties.
    Transparency,
    /// Exclusions from the regulation.
    Exclusion,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Entity => "Entity",
            Self::Scope => "Scope",
            Self::Risk => "Risk",
            Self::Transparency => "Transparency",
            Self::Exclusion => "Exclusion",
        };
        f.write_str(s)
    }
}

/// Where an option leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextStep {
    /// Advance to the question with this id.
    Question(&'static str),
    /// End the questionnaire.
    Finish,
}

impl NextStep {
    /// The question id, or `"finish"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question(id) => id,
            Self::Finish => FINISH,
        }
    }

    /// Whether this edge ends the run.
    pub fn is_finish(&self) -> bool {
        matches!(self, Self::Finish)
    }
}

impl std::fmt::Display for NextStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NextStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    /// Display label.
    pub label: &'static str,
    /// Value token recorded in the answer map. Unique within its question.
    pub value: &'static str,
    /// The edge this option follows.
    pub next: NextStep,
    /// Optional explanatory hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    /// Optional legal reference shown next to the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<&'static str>,
}

impl QuestionOption {
    /// An option with no hint and no legal reference.
    pub const fn new(label: &'static str, value: &'static str, next: NextStep) -> Self {
        Self {
            label,
            value,
            next,
            hint: None,
            legal_reference: None,
        }
    }

    /// Attach a hint.
    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Attach a legal reference.
    pub fn with_reference(mut self, reference: &'static str) -> Self {
        self.legal_reference = Some(reference);
        self
    }
}

/// A question in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Unique identifier.
    pub id: &'static str,
    /// Thematic category.
    pub category: Category,
    /// Prompt text.
    pub prompt: &'static str,
    /// Ordered options.
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Find an option by its value token.
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Whether `option` is one of this question's options.
    ///
    /// Compares value and edge, so an option that reuses a value token but
    /// points elsewhere is not accepted.
    pub fn offers(&self, option: &QuestionOption) -> bool {
        self.options
            .iter()
            .any(|o| o.value == option.value && o.next == option.next)
    }
}

/// A recorded answer: the question, the chosen value, and the resolved edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// The answered question.
    pub question_id: &'static str,
    /// The chosen option's value token.
    pub value: &'static str,
    /// Where the option leads.
    pub next: NextStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            id: "q",
            category: Category::Scope,
            prompt: "Inside?",
            options: vec![
                QuestionOption::new("Yes", "yes", NextStep::Question("r"))
                    .with_reference("Article 2(1)"),
                QuestionOption::new("No", "no", NextStep::Finish).with_hint("outside"),
            ],
        }
    }

    #[test]
    fn test_option_lookup_by_value() {
        let q = sample();
        assert_eq!(q.option("no").map(|o| o.next), Some(NextStep::Finish));
        assert!(q.option("maybe").is_none());
    }

    #[test]
    fn test_offers_compares_value_and_edge() {
        let q = sample();
        assert!(q.offers(&QuestionOption::new("Yes", "yes", NextStep::Question("r"))));
        assert!(!q.offers(&QuestionOption::new("Yes", "yes", NextStep::Finish)));
        assert!(!q.offers(&QuestionOption::new("?", "other", NextStep::Finish)));
    }

    #[test]
    fn test_next_step_serializes_as_id_or_sentinel() {
        assert_eq!(
            serde_json::to_string(&NextStep::Question("scope_location")).unwrap(),
            "\"scope_location\""
        );
        assert_eq!(serde_json::to_string(&NextStep::Finish).unwrap(), "\"finish\"");
    }

    #[test]
    fn test_option_serialization_skips_absent_fields() {
        let json = serde_json::to_value(&sample().options[0]).unwrap();
        assert_eq!(json["legal_reference"], "Article 2(1)");
        assert!(json.get("hint").is_none());
    }
}
