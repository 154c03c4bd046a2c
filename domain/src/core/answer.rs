//! Answer set value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The caller's selections: question id → option key (Value Object)
///
/// Neither ids nor keys are checked against the question bank here; whatever
/// the caller sent is carried through unchanged. Entries are ordered by
/// question id so that serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the selection for a question
    pub fn insert(&mut self, question_id: impl Into<String>, option_key: impl Into<String>) {
        self.selections.insert(question_id.into(), option_key.into());
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, question_id: impl Into<String>, option_key: impl Into<String>) -> Self {
        self.insert(question_id, option_key);
        self
    }

    /// Selected option key for a question, if answered
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.selections.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Iterate `(question_id, option_key)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(id, key)| (id.as_str(), key.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            selections: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_plain_object() {
        let answers: AnswerSet = serde_json::from_str(r#"{"Q2": "B", "Q1": "A"}"#).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("Q1"), Some("A"));
        assert_eq!(answers.get("Q3"), None);
    }

    #[test]
    fn test_serialize_is_key_ordered() {
        let answers = AnswerSet::new().with("Q2", "B").with("Q1", "A");
        assert_eq!(
            serde_json::to_string(&answers).unwrap(),
            r#"{"Q1":"A","Q2":"B"}"#
        );
    }

    #[test]
    fn test_unknown_entries_are_kept() {
        let answers: AnswerSet = [("Q99", "Z")].into_iter().collect();
        assert_eq!(answers.get("Q99"), Some("Z"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut answers = AnswerSet::new();
        answers.insert("Q1", "A");
        answers.insert("Q1", "D");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("Q1"), Some("D"));
    }
}
