//! Answer types for a screening session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The raw value of one answer
///
/// Yes/no questions carry a flag; multiple-choice and free-text questions
/// carry text. On the wire this is a bare JSON boolean or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
}

impl AnswerValue {
    /// Whether this value counts toward triage rules and weighted scores.
    ///
    /// Only an affirmative flag does; text never affirms a symptom on its
    /// own (choice options are weighted separately by the engine).
    pub fn is_affirmative(&self) -> bool {
        matches!(self, AnswerValue::Flag(true))
    }

    /// Convert a JSON value into an answer value.
    ///
    /// Only booleans and strings are meaningful answers; anything else
    /// returns `None` and is treated as unanswered by callers.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(flag) => Some(AnswerValue::Flag(*flag)),
            serde_json::Value::String(text) => Some(AnswerValue::Text(text.clone())),
            _ => None,
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(flag: bool) -> Self {
        AnswerValue::Flag(flag)
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        AnswerValue::Text(text.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        AnswerValue::Text(text)
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Flag(true) => write!(f, "yes"),
            AnswerValue::Flag(false) => write!(f, "no"),
            AnswerValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// One recorded answer (Entity)
///
/// `captured_at` exists for record-keeping (the persistence collaborator is
/// handed it); the triage engine never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    question_id: String,
    value: AnswerValue,
    captured_at: DateTime<Utc>,
}

impl Answer {
    /// Record an answer captured now
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self::recorded_at(question_id, value, Utc::now())
    }

    /// Record an answer with an explicit capture time
    pub fn recorded_at(
        question_id: impl Into<String>,
        value: AnswerValue,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            captured_at,
        }
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn value(&self) -> &AnswerValue {
        &self.value
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

/// The answers collected so far, keyed by question id (Value Object)
///
/// Append-only within a session: the first answer for a question id wins and
/// later inserts for the same id are refused. Iteration order is the sorted
/// key order, so two sets with the same entries always look identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an answer, refusing to overwrite an existing entry.
    ///
    /// Returns `true` if the answer was recorded.
    pub fn insert(&mut self, answer: Answer) -> bool {
        if self.answers.contains_key(answer.question_id()) {
            return false;
        }
        self.answers.insert(answer.question_id().to_string(), answer);
        true
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    /// Whether the question was answered affirmatively.
    ///
    /// An absent answer is "not affirmed", never an error; a partial set
    /// still evaluates to a best-effort verdict.
    pub fn is_affirmed(&self, question_id: &str) -> bool {
        self.answers
            .get(question_id)
            .is_some_and(|a| a.value().is_affirmative())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}
