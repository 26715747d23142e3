use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::questions::SelectionMode;

/// A response to one question: one option value, or a set of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(BTreeSet<String>),
}

impl AnswerValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multiple(_) => None,
        }
    }
}

/// Responses keyed by question id, as collected by the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question_id: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn with_single(self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(question_id, AnswerValue::single(value))
    }

    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        value: AnswerValue,
    ) -> Option<AnswerValue> {
        self.entries.insert(question_id.into(), value)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.entries.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    /// The selected value of a single-choice answer, if present.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_single)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries
            .iter()
            .map(|(question_id, value)| (question_id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(question_id, value)| (question_id.into(), AnswerValue::single(value)))
                .collect(),
        }
    }
}

/// Reasons an answer set cannot be accepted at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerSetError {
    #[error("question '{0}' has not been answered")]
    MissingAnswer(String),
    #[error("question '{0}' is not part of the questionnaire")]
    UnknownQuestion(String),
    #[error("'{value}' is not an option for question '{question_id}'")]
    UnknownOption { question_id: String, value: String },
    #[error("question '{question_id}' expects a {expected:?} selection")]
    SelectionMode {
        question_id: String,
        expected: SelectionMode,
    },
    #[error("question '{0}' needs at least one selected option")]
    EmptySelection(String),
}
