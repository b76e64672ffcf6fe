//! # Evaluator
//!
//! Pure evaluation of a rule set over an answer map. The only impurity is
//! reading the clock in [`Evaluator::evaluate()`]; [`Evaluator::evaluate_at()`]
//! takes the timestamp explicitly.

use aiact_core::Timestamp;
use aiact_questionnaire::AnswerMap;

use crate::report::{ReportContext, UnsealedReport, SCHEMA_VERSION};
use crate::rules::RuleSet;

/// Evaluate `answers` with the standard rules and default context.
pub fn evaluate(answers: &AnswerMap) -> UnsealedReport {
    Evaluator::standard().evaluate(answers)
}

/// Evaluate `answers` with the standard rules under `context` as of `timestamp`.
pub fn evaluate_with(
    answers: &AnswerMap,
    context: &ReportContext,
    timestamp: Timestamp,
) -> UnsealedReport {
    Evaluator::with_context(context.clone()).evaluate_at(answers, timestamp)
}

/// A rule set paired with the contextual report fields.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    rules: RuleSet,
    context: ReportContext,
}

impl Evaluator {
    /// An evaluator with explicit rules and context.
    pub fn new(rules: RuleSet, context: ReportContext) -> Self {
        Self { rules, context }
    }

    /// Standard rules, default context.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Standard rules with a custom context.
    pub fn with_context(context: ReportContext) -> Self {
        Self::new(RuleSet::standard(), context)
    }

    /// The contextual fields applied to every report.
    pub fn context(&self) -> &ReportContext {
        &self.context
    }

    /// Evaluate at the current time.
    pub fn evaluate(&self, answers: &AnswerMap) -> UnsealedReport {
        self.evaluate_at(answers, Timestamp::now())
    }

    /// Evaluate as of `timestamp`.
    pub fn evaluate_at(&self, answers: &AnswerMap, timestamp: Timestamp) -> UnsealedReport {
        let (rule, outcome) = self.rules.first_match(answers);
        tracing::info!(
            rule,
            classification = %outcome.classification,
            risk_score = outcome.risk_score,
            answered = answers.len(),
            "assessment classified"
        );

        UnsealedReport {
            timestamp,
            version: SCHEMA_VERSION.to_string(),
            system_id: self.context.system_id(&timestamp),
            classification: outcome.classification,
            risk_score: outcome.risk_score,
            risk_level: outcome.risk_level,
            summary: outcome.summary.to_string(),
            owner: self.context.owner.clone(),
            obligations: outcome.obligations(),
            references: outcome.references(),
            notes: self.context.notes.clone(),
        }
    }
}
