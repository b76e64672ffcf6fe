//! # Rule Table
//!
//! An ordered list of `(predicate, outcome)` pairs plus a fallback outcome.
//! Adding or reordering a rule is an edit to [`STANDARD_RULES`], not to
//! control flow.
//!
//! The fallback is held separately from the ladder, so a `RuleSet` always
//! produces an outcome.

use aiact_questionnaire::{ids, AnswerMap};

use crate::classification::{Classification, RiskLevel};
use crate::report::Obligation;

/// A condition over the answer map. An unanswered question never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The answer to `question` equals `value`.
    Equals {
        /// Question id.
        question: &'static str,
        /// Required value token.
        value: &'static str,
    },
    /// The answer to `question` is one of `values`.
    AnyOf {
        /// Question id.
        question: &'static str,
        /// Accepted value tokens.
        values: &'static [&'static str],
    },
}

impl Predicate {
    /// Evaluate against `answers`.
    pub fn matches(&self, answers: &AnswerMap) -> bool {
        match self {
            Self::Equals { question, value } => answers.get(question) == Some(*value),
            Self::AnyOf { question, values } => answers
                .get(question)
                .is_some_and(|answer| values.iter().any(|v| *v == answer)),
        }
    }
}

/// The fixed result attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Classification.
    pub classification: Classification,
    /// Risk score.
    pub risk_score: u8,
    /// Risk level.
    pub risk_level: RiskLevel,
    /// Summary text.
    pub summary: &'static str,
    /// Obligation names, created as not-started.
    pub obligations: &'static [&'static str],
    /// Legal references.
    pub references: &'static [&'static str],
}

impl RuleOutcome {
    /// Fresh obligation records for this outcome.
    pub fn obligations(&self) -> Vec<Obligation> {
        self.obligations.iter().map(|&n| Obligation::new(n)).collect()
    }

    /// Owned copies of the references.
    pub fn references(&self) -> Vec<String> {
        self.references.iter().map(|&r| r.to_string()).collect()
    }
}

/// A named predicate with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Name used in logs.
    pub name: &'static str,
    /// Match condition.
    pub when: Predicate,
    /// Result when matched.
    pub then: RuleOutcome,
}

/// Ordered rules with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    fallback: RuleOutcome,
    fallback_name: &'static str,
}

impl RuleSet {
    /// Build a rule set. Rules are tried in order.
    pub fn new(rules: Vec<Rule>, fallback_name: &'static str, fallback: RuleOutcome) -> Self {
        Self {
            rules,
            fallback,
            fallback_name,
        }
    }

    /// The built-in rule ladder with the Minimal-Risk fallback.
    pub fn standard() -> Self {
        Self::new(STANDARD_RULES.to_vec(), "minimal-risk", MINIMAL_RISK)
    }

    /// The ordered rules, not including the fallback.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The fallback outcome.
    pub fn fallback(&self) -> &RuleOutcome {
        &self.fallback
    }

    /// First matching rule's name and outcome, or the fallback.
    pub fn first_match(&self, answers: &AnswerMap) -> (&'static str, &RuleOutcome) {
        self.rules
            .iter()
            .find(|rule| rule.when.matches(answers))
            .map(|rule| (rule.name, &rule.then))
            .unwrap_or((self.fallback_name, &self.fallback))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

// ─── Built-in rules ──────────────────────────────────────────────────

/// The built-in rule ladder in precedence order.
///
/// Territorial scope is a gate evaluated first; prohibition supersedes the
/// risk tiers.
pub const STANDARD_RULES: &[Rule] = &[
    Rule {
        name: "out-of-scope",
        when: Predicate::Equals {
            question: ids::SCOPE_LOCATION,
            value: "outside_eu",
        },
        then: RuleOutcome {
            classification: Classification::OutOfScope,
            risk_score: 0,
            risk_level: RiskLevel::NotApplicable,
            summary: "Based on your answers, the AI system appears to be outside the territorial scope of the EU AI Act.",
            obligations: &[],
            references: &["Article 2"],
        },
    },
    Rule {
        name: "prohibited",
        when: Predicate::AnyOf {
            question: ids::FUNCTION_TYPE,
            values: &["social_scoring", "manipulative", "exploitative"],
        },
        then: RuleOutcome {
            classification: Classification::Prohibited,
            risk_score: 95,
            risk_level: RiskLevel::High,
            summary: "The described function is likely considered a prohibited practice under the AI Act. These systems are banned from the EU market.",
            obligations: &["Cease development and deployment in the EU."],
            references: &["Article 5"],
        },
    },
    Rule {
        name: "high-risk",
        when: Predicate::AnyOf {
            question: ids::SYSTEM_PURPOSE,
            values: &["biometrics", "critical_infra", "essential_services"],
        },
        then: RuleOutcome {
            classification: Classification::HighRisk,
            risk_score: 82,
            risk_level: RiskLevel::High,
            summary: "The system falls into a category listed in Annex III, classifying it as High-Risk. This imposes significant compliance obligations.",
            obligations: &[
                "Establish a risk management system (Article 9)",
                "Ensure data quality and governance (Article 10)",
                "Maintain technical documentation (Article 11)",
                "Implement record-keeping/logging (Article 12)",
                "Ensure transparency and provide instructions for use (Article 13)",
                "Implement human oversight measures (Article 14)",
                "Ensure accuracy, robustness, and cybersecurity (Article 15)",
            ],
            references: &["Annex III", "Article 6"],
        },
    },
    Rule {
        name: "in-scope",
        when: Predicate::Equals {
            question: ids::SCOPE_LOCATION,
            value: "eu_market",
        },
        then: RuleOutcome {
            classification: Classification::InScope,
            risk_score: 45,
            risk_level: RiskLevel::Medium,
            summary: "The system is within the scope of the AI Act but does not appear to be high-risk or prohibited based on the information provided. Transparency obligations may still apply.",
            obligations: &[
                "Ensure users are aware they are interacting with an AI system (Article 52).",
                "Consider adopting codes of conduct for non-high-risk AI.",
            ],
            references: &["Article 52"],
        },
    },
];

/// Fallback when no rule in the ladder matches.
pub const MINIMAL_RISK: RuleOutcome = RuleOutcome {
    classification: Classification::MinimalRisk,
    risk_score: 10,
    risk_level: RiskLevel::Low,
    summary: "Based on your answers, the system appears to pose minimal or no risk. While direct obligations are limited, voluntary adherence to codes of conduct is encouraged.",
    obligations: &["Voluntary adoption of codes of conduct."],
    references: &["Recital 78"],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_ladder_order() {
        let names: Vec<_> = RuleSet::standard().rules().iter().map(|r| r.name).collect();
        assert_eq!(names, ["out-of-scope", "prohibited", "high-risk", "in-scope"]);
    }

    #[test]
    fn test_predicate_missing_key_never_matches() {
        let empty = AnswerMap::new();
        for rule in STANDARD_RULES {
            assert!(!rule.when.matches(&empty), "{} matched empty answers", rule.name);
        }
    }

    #[test]
    fn test_any_of() {
        let p = Predicate::AnyOf {
            question: "q",
            values: &["a", "b"],
        };
        assert!(p.matches(&answers(&[("q", "b")])));
        assert!(!p.matches(&answers(&[("q", "c")])));
        assert!(!p.matches(&answers(&[("other", "a")])));
    }

    #[test]
    fn test_first_match_falls_back() {
        let set = RuleSet::standard();
        let (name, outcome) = set.first_match(&AnswerMap::new());
        assert_eq!(name, "minimal-risk");
        assert_eq!(outcome.classification, Classification::MinimalRisk);
    }

    #[test]
    fn test_reordering_is_a_data_change() {
        // Put in-scope ahead of prohibited: the same answers now classify
        // differently without touching the evaluator.
        let mut rules = STANDARD_RULES.to_vec();
        rules.swap(1, 3);
        let set = RuleSet::new(rules, "minimal-risk", MINIMAL_RISK);
        let a = answers(&[("scope_location", "eu_market"), ("function_type", "social_scoring")]);
        assert_eq!(set.first_match(&a).1.classification, Classification::InScope);
        assert_eq!(
            RuleSet::standard().first_match(&a).1.classification,
            Classification::Prohibited
        );
    }

    #[test]
    fn test_outcome_obligations_start_not_started() {
        let high = &STANDARD_RULES[2].then;
        let obligations = high.obligations();
        assert_eq!(obligations.len(), 7);
        assert!(obligations
            .iter()
            .all(|o| o.status == crate::report::ObligationStatus::NotStarted));
    }
}
