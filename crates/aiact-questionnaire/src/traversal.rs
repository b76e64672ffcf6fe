//! # Traversal Engine
//!
//! One `Traversal` per user session. It owns the current node, the
//! accumulated [`AnswerMap`], the visited-node history, and the terminal
//! flag. It borrows the catalog immutably and shares nothing else, so a
//! reset is simply a new value.
//!
//! ## Transitions
//!
//! - `submit_answer(option)` on a non-terminal engine whose current
//!   question offers `option`: record the answer, then either advance along
//!   `option.next` or become terminal on `finish`.
//! - Any submission after the terminal state, or with an option the current
//!   question does not offer, is rejected with `InvalidTransition` and
//!   leaves the state untouched.
//! - `revisit(id)` moves back to an already-visited question and forgets
//!   everything visited after it, so the answers always describe one path
//!   through the catalog. A later answer to it overwrites the earlier one.

use aiact_core::SessionId;

use crate::answers::AnswerMap;
use crate::catalog::Catalog;
use crate::error::QuestionnaireError;
use crate::question::{Answer, NextStep, Question, QuestionOption};

/// What the caller should present next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'c> {
    /// Render this question.
    Question(&'c Question),
    /// The run is complete; evaluate the answers.
    Finished,
}

impl<'c> Step<'c> {
    /// Whether this step is the terminal signal.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Per-session traversal state over a catalog.
#[derive(Debug)]
pub struct Traversal<'c> {
    catalog: &'c Catalog,
    session: SessionId,
    current: &'static str,
    answers: AnswerMap,
    history: Vec<&'static str>,
    log: Vec<Answer>,
    finished: bool,
}

impl Traversal<'static> {
    /// A fresh traversal over the built-in catalog.
    pub fn start() -> Self {
        Self::new(Catalog::global())
    }
}

impl<'c> Traversal<'c> {
    /// A fresh traversal positioned at the catalog's start question.
    pub fn new(catalog: &'c Catalog) -> Self {
        let session = SessionId::new();
        let start = catalog.start_id();
        tracing::debug!(%session, start, "traversal started");
        Self {
            catalog,
            session,
            current: start,
            answers: AnswerMap::new(),
            history: vec![start],
            log: Vec::new(),
            finished: false,
        }
    }

    /// A new engine in the initial state over the same catalog.
    ///
    /// Shares no answers, history, or session id with `self`.
    pub fn reset(&self) -> Traversal<'c> {
        Traversal::new(self.catalog)
    }

    /// Session identifier used to correlate log lines.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The catalog this engine walks.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Id of the question the engine is positioned on.
    ///
    /// After the terminal state this is the question whose answer finished
    /// the run.
    pub fn current_id(&self) -> &'static str {
        self.current
    }

    /// The current step.
    ///
    /// # Errors
    ///
    /// `UnknownQuestionId` if the current id does not resolve, which only
    /// happens with a catalog that was never validated.
    pub fn current(&self) -> Result<Step<'c>, QuestionnaireError> {
        if self.finished {
            return Ok(Step::Finished);
        }
        self.catalog.get(self.current).map(Step::Question)
    }

    /// Submit a chosen option for the current question.
    pub fn submit_answer(
        &mut self,
        option: &QuestionOption,
    ) -> Result<Step<'c>, QuestionnaireError> {
        if self.finished {
            return Err(self.reject(option.value, "questionnaire already finished"));
        }
        let question = self.catalog.get(self.current)?;
        let Some(chosen) = question
            .options
            .iter()
            .find(|o| o.value == option.value && o.next == option.next)
        else {
            return Err(self.reject(option.value, "option does not belong to the current question"));
        };

        let next_question = match chosen.next {
            NextStep::Finish => None,
            NextStep::Question(next) => Some(self.catalog.get(next)?),
        };

        self.record(question, chosen);

        match next_question {
            None => {
                self.finished = true;
                tracing::info!(
                    session = %self.session,
                    answered = self.answers.len(),
                    "questionnaire finished"
                );
                Ok(Step::Finished)
            }
            Some(next) => {
                self.current = next.id;
                if !self.history.contains(&next.id) {
                    self.history.push(next.id);
                }
                Ok(Step::Question(next))
            }
        }
    }

    /// Submit an answer by value token.
    ///
    /// An unknown token is an `InvalidTransition`.
    pub fn submit_value(&mut self, value: &str) -> Result<Step<'c>, QuestionnaireError> {
        if self.finished {
            return Err(self.reject(value, "questionnaire already finished"));
        }
        let question = self.catalog.get(self.current)?;
        match question.option(value) {
            Some(option) => self.submit_answer(option),
            None => Err(self.reject(value, "no option with this value")),
        }
    }

    /// Move back to a previously visited question.
    ///
    /// Questions visited after it are dropped from the history together with
    /// their answers. The revisited question keeps its answer until it is
    /// answered again.
    pub fn revisit(&mut self, question_id: &str) -> Result<Step<'c>, QuestionnaireError> {
        if self.finished {
            return Err(self.reject(question_id, "questionnaire already finished"));
        }
        let Some(pos) = self.history.iter().position(|&h| h == question_id) else {
            return Err(self.reject(question_id, "question has not been visited"));
        };
        let id = self.history[pos];
        let question = self.catalog.get(id)?;

        for dropped in self.history.drain(pos + 1..) {
            if let Some(value) = self.answers.remove(dropped) {
                tracing::debug!(
                    session = %self.session,
                    question = dropped,
                    value = %value,
                    "answer discarded"
                );
            }
        }
        tracing::debug!(session = %self.session, from = self.current, to = id, "revisit");
        self.current = id;
        Ok(Step::Question(question))
    }

    /// The accumulated answers.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Consume the engine, yielding its answers.
    pub fn into_answers(self) -> AnswerMap {
        self.answers
    }

    /// Visited question ids in first-visit order, without duplicates.
    pub fn history(&self) -> &[&'static str] {
        &self.history
    }

    /// Every accepted submission in order, including overwritten ones.
    pub fn log(&self) -> &[Answer] {
        &self.log
    }

    /// Whether the terminal state has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of distinct questions answered.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Completion percentage for display: answered / total, rounded,
    /// and `100` once finished. Has no effect on control flow.
    pub fn progress(&self) -> u8 {
        if self.finished {
            return 100;
        }
        let total = self.catalog.len();
        if total == 0 {
            return 0;
        }
        let pct = (self.answers.len() * 100 + total / 2) / total;
        pct.min(100) as u8
    }

    fn record(&mut self, question: &Question, chosen: &QuestionOption) {
        if let Some(previous) = self.answers.insert(question.id, chosen.value) {
            tracing::debug!(
                session = %self.session,
                question = question.id,
                previous = %previous,
                value = chosen.value,
                "answer overwritten"
            );
        } else {
            tracing::debug!(
                session = %self.session,
                question = question.id,
                value = chosen.value,
                next = %chosen.next,
                "answer recorded"
            );
        }
        self.log.push(Answer {
            question_id: question.id,
            value: chosen.value,
            next: chosen.next,
        });
    }

    fn reject(&self, value: &str, reason: &str) -> QuestionnaireError {
        tracing::warn!(
            session = %self.session,
            question = self.current,
            value,
            reason,
            "transition rejected"
        );
        QuestionnaireError::InvalidTransition {
            question: self.current.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ids;
    use crate::question::Category;

    fn option<'a>(catalog: &'a Catalog, question: &str, value: &str) -> &'a QuestionOption {
        catalog.get(question).unwrap().option(value).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let t = Traversal::start();
        assert_eq!(t.current_id(), ids::START);
        assert!(t.answers().is_empty());
        assert_eq!(t.history(), ["start"]);
        assert!(!t.is_finished());
        assert_eq!(t.progress(), 0);
        match t.current().unwrap() {
            Step::Question(q) => assert_eq!(q.id, "start"),
            Step::Finished => panic!("fresh traversal is finished"),
        }
    }

    #[test]
    fn test_high_risk_path() {
        let catalog = Catalog::global();
        let mut t = Traversal::new(catalog);
        t.submit_answer(option(catalog, "start", "provider")).unwrap();
        t.submit_answer(option(catalog, "scope_location", "eu_market")).unwrap();
        let step = t
            .submit_answer(option(catalog, "system_purpose", "biometrics"))
            .unwrap();
        assert!(step.is_finished());
        assert!(t.is_finished());
        assert_eq!(t.current_id(), "system_purpose");
        assert_eq!(t.answers().get("system_purpose"), Some("biometrics"));
        assert_eq!(t.history(), ["start", "scope_location", "system_purpose"]);
        assert_eq!(t.progress(), 100);
    }

    #[test]
    fn test_submit_value_full_path() {
        let mut t = Traversal::start();
        for value in ["deployer", "eu_market", "general_purpose"] {
            assert!(!t.submit_value(value).unwrap().is_finished());
        }
        assert!(t.submit_value("none_prohibited").unwrap().is_finished());
        assert_eq!(t.answered_count(), 4);
        assert_eq!(t.log().len(), 4);
        assert_eq!(t.log()[3].next, NextStep::Finish);
    }

    #[test]
    fn test_progress_is_rounded_fraction() {
        let mut t = Traversal::start();
        t.submit_value("provider").unwrap();
        assert_eq!(t.progress(), 25);
        t.submit_value("eu_market").unwrap();
        assert_eq!(t.progress(), 50);
    }

    #[test]
    fn test_foreign_option_is_rejected_and_answers_unchanged() {
        let catalog = Catalog::global();
        let mut t = Traversal::new(catalog);
        t.submit_value("provider").unwrap();
        let before = t.answers().clone();

        let foreign = option(catalog, "function_type", "social_scoring");
        let err = t.submit_answer(foreign).unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidTransition { .. }));
        assert_eq!(t.answers(), &before);
        assert_eq!(t.current_id(), "scope_location");
    }

    #[test]
    fn test_forged_edge_is_rejected() {
        let mut t = Traversal::start();
        let forged = QuestionOption::new("Provider", "provider", NextStep::Finish);
        assert!(t.submit_answer(&forged).is_err());
        assert!(t.answers().is_empty());
        assert!(!t.is_finished());
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let mut t = Traversal::start();
        match t.submit_value("astronaut") {
            Err(QuestionnaireError::InvalidTransition { question, value, .. }) => {
                assert_eq!(question, "start");
                assert_eq!(value, "astronaut");
            }
            other => panic!("Expected InvalidTransition, got: {other:?}"),
        }
    }

    #[test]
    fn test_answers_frozen_after_finish() {
        let mut t = Traversal::start();
        t.submit_value("provider").unwrap();
        t.submit_value("outside_eu").unwrap();
        let frozen = t.answers().clone();

        assert!(t.submit_value("eu_market").is_err());
        assert!(t.revisit("start").is_err());
        assert_eq!(t.answers(), &frozen);
        assert_eq!(t.current().unwrap(), Step::Finished);
    }

    #[test]
    fn test_revisit_overwrites_previous_answer() {
        let mut t = Traversal::start();
        t.submit_value("provider").unwrap();
        t.submit_value("eu_market").unwrap();
        t.revisit("scope_location").unwrap();
        assert_eq!(t.current_id(), "scope_location");

        t.submit_value("outside_eu").unwrap();
        assert!(t.is_finished());
        assert_eq!(t.answers().get("scope_location"), Some("outside_eu"));
        assert_eq!(t.answers().len(), 2);
        assert_eq!(t.history(), ["start", "scope_location"]);
    }

    #[test]
    fn test_revisit_discards_downstream_answers() {
        let mut t = Traversal::start();
        for value in ["provider", "eu_market", "general_purpose"] {
            t.submit_value(value).unwrap();
        }
        assert_eq!(t.current_id(), "function_type");

        t.revisit("scope_location").unwrap();
        assert_eq!(t.history(), ["start", "scope_location"]);
        assert_eq!(t.answers().get("scope_location"), Some("eu_market"));
        assert!(!t.answers().contains("system_purpose"));

        t.submit_value("outside_eu").unwrap();
        let expected: AnswerMap = [("start", "provider"), ("scope_location", "outside_eu")]
            .into_iter()
            .collect();
        assert_eq!(t.answers(), &expected);
    }

    #[test]
    fn test_dangling_edge_leaves_state_untouched() {
        let catalog = Catalog::from_questions(
            "a",
            vec![Question {
                id: "a",
                category: Category::Scope,
                prompt: "a?",
                options: vec![QuestionOption::new("x", "x", NextStep::Question("missing"))],
            }],
        );
        assert!(catalog.validate().is_err());

        let mut t = Traversal::new(&catalog);
        match t.submit_value("x") {
            Err(QuestionnaireError::UnknownQuestionId(id)) => assert_eq!(id, "missing"),
            other => panic!("Expected UnknownQuestionId, got: {other:?}"),
        }
        assert!(t.answers().is_empty());
        assert!(t.log().is_empty());
        assert_eq!(t.current_id(), "a");
        assert_eq!(t.history(), ["a"]);
    }

    #[test]
    fn test_revisit_unvisited_is_rejected() {
        let mut t = Traversal::start();
        assert!(t.revisit("function_type").is_err());
        assert_eq!(t.current_id(), "start");
    }

    #[test]
    fn test_reset_shares_nothing() {
        let mut t = Traversal::start();
        t.submit_value("provider").unwrap();
        t.submit_value("outside_eu").unwrap();

        let fresh = t.reset();
        assert_ne!(fresh.session(), t.session());
        assert!(fresh.answers().is_empty());
        assert_eq!(fresh.history(), ["start"]);
        assert!(!fresh.is_finished());
        // The original run is untouched.
        assert_eq!(t.answers().len(), 2);
    }

    #[test]
    fn test_cycle_advances_one_edge_per_answer() {
        let catalog = Catalog::from_questions(
            "a",
            vec![
                Question {
                    id: "a",
                    category: Category::Risk,
                    prompt: "a?",
                    options: vec![
                        QuestionOption::new("to b", "go", NextStep::Question("b")),
                        QuestionOption::new("stop", "stop", NextStep::Finish),
                    ],
                },
                Question {
                    id: "b",
                    category: Category::Risk,
                    prompt: "b?",
                    options: vec![QuestionOption::new("to a", "back", NextStep::Question("a"))],
                },
            ],
        );
        catalog.validate().unwrap();

        let mut t = Traversal::new(&catalog);
        for _ in 0..5 {
            t.submit_value("go").unwrap();
            assert_eq!(t.current_id(), "b");
            t.submit_value("back").unwrap();
            assert_eq!(t.current_id(), "a");
        }
        assert_eq!(t.history(), ["a", "b"]);
        assert_eq!(t.log().len(), 10);
        assert!(t.submit_value("stop").unwrap().is_finished());
    }
}
