//! # Answer Map
//!
//! Question id → chosen value token. Keys are unique; inserting an answer
//! for a question that already has one overwrites it. Iteration order is
//! sorted by question id and carries no meaning for evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accumulated answers of one questionnaire run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, String>);

impl AnswerMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `question_id`, returning the previous value if any.
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(question_id.into(), value.into())
    }

    /// Drop the answer for `question_id`, returning it if there was one.
    pub fn remove(&mut self, question_id: &str) -> Option<String> {
        self.0.remove(question_id)
    }

    /// The value chosen for `question_id`, if answered.
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// Whether `question_id` has an answer.
    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(question_id, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
