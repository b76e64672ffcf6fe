//! # Question Catalog
//!
//! The fixed decision tree, built once into process-wide immutable state.
//! [`Catalog::global()`] is the only handle to the built-in questions and
//! exposes no write path.
//!
//! Lookup by id is O(1) through an id → position index constructed
//! alongside the question list.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::OnceLock;

use crate::error::QuestionnaireError;
use crate::question::{Category, NextStep, Question, QuestionOption};

/// Question identifiers of the built-in catalog.
pub mod ids {
    /// The designated first question.
    pub const START: &str = "start";
    /// Whether the system is placed on or used within the EU.
    pub const SCOPE_LOCATION: &str = "scope_location";
    /// Primary purpose of the system.
    pub const SYSTEM_PURPOSE: &str = "system_purpose";
    /// Functions prohibited under Article 5.
    pub const FUNCTION_TYPE: &str = "function_type";
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// An indexed, immutable set of questions with a designated start.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    index: HashMap<&'static str, usize>,
    start: &'static str,
}

impl Catalog {
    /// The built-in catalog.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| Catalog::from_questions(ids::START, builtin_questions()))
    }

    /// Build a catalog from arbitrary questions.
    ///
    /// Does not validate; call [`Catalog::validate()`] before handing the
    /// catalog to a traversal. On duplicate ids the first occurrence is
    /// indexed.
    pub fn from_questions(start: &'static str, questions: Vec<Question>) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (pos, q) in questions.iter().enumerate() {
            index.entry(q.id).or_insert(pos);
        }
        Self {
            questions,
            index,
            start,
        }
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Result<&Question, QuestionnaireError> {
        self.index
            .get(id)
            .map(|&pos| &self.questions[pos])
            .ok_or_else(|| QuestionnaireError::UnknownQuestionId(id.to_string()))
    }

    /// The designated start id.
    pub fn start_id(&self) -> &'static str {
        self.start
    }

    /// The designated start question.
    pub fn start(&self) -> Result<&Question, QuestionnaireError> {
        self.get(self.start)
    }

    /// All questions in definition order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check the structural invariants of the catalog.
    ///
    /// - The start id resolves.
    /// - Question ids are unique.
    /// - Option values are unique within each question.
    /// - Every `next` other than `finish` resolves (referential closure).
    /// - Every question is reachable from the start.
    ///
    /// Cycles are permitted.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        self.start()?;

        if self.index.len() != self.questions.len() {
            return Err(QuestionnaireError::InvalidCatalog(
                "duplicate question id".to_string(),
            ));
        }

        for q in &self.questions {
            let mut seen = HashSet::new();
            for opt in &q.options {
                if !seen.insert(opt.value) {
                    return Err(QuestionnaireError::InvalidCatalog(format!(
                        "question {:?} has duplicate option value {:?}",
                        q.id, opt.value
                    )));
                }
                if let NextStep::Question(next) = opt.next {
                    self.get(next)?;
                }
            }
        }

        let reachable = self.reachable_from_start();
        if let Some(orphan) = self.questions.iter().find(|q| !reachable.contains(q.id)) {
            return Err(QuestionnaireError::InvalidCatalog(format!(
                "question {:?} is not reachable from {:?}",
                orphan.id, self.start
            )));
        }

        Ok(())
    }

    /// Breadth-first walk over `next` edges from the start id.
    fn reachable_from_start(&self) -> HashSet<&'static str> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([self.start]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Ok(q) = self.get(id) {
                for opt in &q.options {
                    if let NextStep::Question(next) = opt.next {
                        queue.push_back(next);
                    }
                }
            }
        }
        seen
    }
}

fn builtin_questions() -> Vec<Question> {
    use NextStep::{Finish, Question as Next};

    vec![
        Question {
            id: ids::START,
            category: Category::Entity,
            prompt: "What is your role in relation to the AI system?",
            options: vec![
                QuestionOption::new(
                    "Provider (developing the AI system)",
                    "provider",
                    Next(ids::SCOPE_LOCATION),
                ),
                QuestionOption::new(
                    "Deployer (using the AI system)",
                    "deployer",
                    Next(ids::SCOPE_LOCATION),
                ),
                QuestionOption::new("Importer/Distributor", "importer", Next(ids::SCOPE_LOCATION)),
                QuestionOption::new("Other", "other", Next(ids::SCOPE_LOCATION))
                    .with_hint("This includes individuals, researchers, etc."),
            ],
        },
        Question {
            id: ids::SCOPE_LOCATION,
            category: Category::Scope,
            prompt: "Is the AI system placed on the market, put into service, or used within the European Union?",
            options: vec![
                QuestionOption::new("Yes", "eu_market", Next(ids::SYSTEM_PURPOSE))
                    .with_reference("Article 2(1)"),
                QuestionOption::new("No", "outside_eu", Finish).with_hint(
                    "The AI Act generally applies to systems affecting people within the EU.",
                ),
            ],
        },
        Question {
            id: ids::SYSTEM_PURPOSE,
            category: Category::Risk,
            prompt: "What is the primary purpose of the AI system?",
            options: vec![
                QuestionOption::new(
                    "General purpose (e.g. large language models)",
                    "general_purpose",
                    Next(ids::FUNCTION_TYPE),
                )
                .with_reference("Article 3(1)"),
                QuestionOption::new(
                    "Biometric identification or categorization",
                    "biometrics",
                    Finish,
                )
                .with_hint("Includes systems for facial recognition in public spaces."),
                QuestionOption::new("Critical infrastructure management", "critical_infra", Finish)
                    .with_hint("e.g., water, gas, and electricity supply."),
                QuestionOption::new(
                    "Education, employment, or access to services",
                    "essential_services",
                    Finish,
                )
                .with_reference("Annex III"),
                QuestionOption::new("None of the above", "other_purpose", Next(ids::FUNCTION_TYPE)),
            ],
        },
        Question {
            id: ids::FUNCTION_TYPE,
            category: Category::Risk,
            prompt: "Does the AI system perform any of the following functions?",
            options: vec![
                QuestionOption::new("Social scoring of natural persons", "social_scoring", Finish)
                    .with_reference("Article 5(1)(c)"),
                QuestionOption::new(
                    "Manipulative techniques to distort behavior",
                    "manipulative",
                    Finish,
                )
                .with_reference("Article 5(1)(a)"),
                QuestionOption::new(
                    "Exploiting vulnerabilities of a specific group",
                    "exploitative",
                    Finish,
                )
                .with_reference("Article 5(1)(b)"),
                QuestionOption::new("None of the above", "none_prohibited", Finish),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &'static str, options: Vec<QuestionOption>) -> Question {
        Question {
            id,
            category: Category::Risk,
            prompt: "?",
            options,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        Catalog::global().validate().unwrap();
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::global();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.start_id(), "start");
        assert_eq!(catalog.start().unwrap().category, Category::Entity);
        let ids: Vec<_> = catalog.questions().iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            ["start", "scope_location", "system_purpose", "function_type"]
        );
    }

    #[test]
    fn test_every_next_resolves() {
        let catalog = Catalog::global();
        for q in catalog.questions() {
            for opt in &q.options {
                if let NextStep::Question(next) = opt.next {
                    assert!(
                        catalog.get(next).is_ok(),
                        "{}.{} points at missing question {next}",
                        q.id,
                        opt.value
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_path_reaches_finish() {
        // The built-in tree is acyclic, so a depth-first walk terminates.
        fn walk(catalog: &Catalog, id: &str, depth: usize) {
            assert!(depth <= catalog.len(), "path longer than catalog at {id}");
            for opt in &catalog.get(id).unwrap().options {
                if let NextStep::Question(next) = opt.next {
                    walk(catalog, next, depth + 1);
                }
            }
        }
        let catalog = Catalog::global();
        walk(catalog, catalog.start_id(), 0);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }

    #[test]
    fn test_unknown_id() {
        match Catalog::global().get("nope") {
            Err(QuestionnaireError::UnknownQuestionId(id)) => assert_eq!(id, "nope"),
            other => panic!("Expected UnknownQuestionId, got: {other:?}"),
        }
    }

    #[test]
    fn test_dangling_next_is_rejected() {
        let catalog = Catalog::from_questions(
            "a",
            vec![question(
                "a",
                vec![QuestionOption::new("x", "x", NextStep::Question("missing"))],
            )],
        );
        assert_eq!(
            catalog.validate(),
            Err(QuestionnaireError::UnknownQuestionId("missing".to_string()))
        );
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let catalog = Catalog::from_questions("start", vec![]);
        assert!(matches!(
            catalog.validate(),
            Err(QuestionnaireError::UnknownQuestionId(_))
        ));
    }

    #[test]
    fn test_duplicate_option_value_is_rejected() {
        let catalog = Catalog::from_questions(
            "a",
            vec![question(
                "a",
                vec![
                    QuestionOption::new("x", "x", NextStep::Finish),
                    QuestionOption::new("y", "x", NextStep::Finish),
                ],
            )],
        );
        assert!(matches!(
            catalog.validate(),
            Err(QuestionnaireError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_duplicate_question_id_is_rejected() {
        let catalog = Catalog::from_questions(
            "a",
            vec![
                question("a", vec![QuestionOption::new("x", "x", NextStep::Finish)]),
                question("a", vec![QuestionOption::new("y", "y", NextStep::Finish)]),
            ],
        );
        assert!(matches!(
            catalog.validate(),
            Err(QuestionnaireError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_unreachable_question_is_rejected() {
        let catalog = Catalog::from_questions(
            "a",
            vec![
                question("a", vec![QuestionOption::new("x", "x", NextStep::Finish)]),
                question("island", vec![QuestionOption::new("y", "y", NextStep::Finish)]),
            ],
        );
        assert!(matches!(
            catalog.validate(),
            Err(QuestionnaireError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_cycle_is_structurally_allowed() {
        let catalog = Catalog::from_questions(
            "a",
            vec![
                question(
                    "a",
                    vec![
                        QuestionOption::new("to b", "b", NextStep::Question("b")),
                        QuestionOption::new("done", "done", NextStep::Finish),
                    ],
                ),
                question("b", vec![QuestionOption::new("to a", "a", NextStep::Question("a"))]),
            ],
        );
        catalog.validate().unwrap();
    }
}
