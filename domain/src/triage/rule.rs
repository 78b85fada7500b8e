//! Triage rules
//!
//! Rules express the decision table as data: a tagged predicate over the
//! answer set paired with the verdict it produces. Keeping priority in the
//! rule *order* (rather than nested conditionals) makes the table
//! independently testable and extensible.

use super::verdict::Verdict;
use crate::screening::AnswerSet;
use serde::{Deserialize, Serialize};

/// A predicate over an answer set
///
/// # Example
///
/// ```
/// use navigator_domain::screening::{Answer, AnswerSet, AnswerValue};
/// use navigator_domain::triage::Condition;
///
/// let answers: AnswerSet = [
///     Answer::new("fever", AnswerValue::Flag(true)),
///     Answer::new("severeHeadache", AnswerValue::Flag(true)),
/// ]
/// .into_iter()
/// .collect();
///
/// let both = Condition::all_of([
///     Condition::affirmed("fever"),
///     Condition::affirmed("severeHeadache"),
/// ]);
/// assert!(both.matches(&answers));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// The question was answered affirmatively
    Affirmed(String),
    /// Every nested condition holds
    AllOf(Vec<Condition>),
    /// At least one nested condition holds
    AnyOf(Vec<Condition>),
}

impl Condition {
    pub fn affirmed(question_id: impl Into<String>) -> Self {
        Condition::Affirmed(question_id.into())
    }

    pub fn all_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::AllOf(conditions.into_iter().collect())
    }

    pub fn any_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::AnyOf(conditions.into_iter().collect())
    }

    /// Evaluate the predicate against an answer set.
    ///
    /// Missing answers are "not affirmed"; ids the catalog does not know
    /// simply never match. `AllOf([])` is vacuously true, `AnyOf([])`
    /// false.
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Affirmed(id) => answers.is_affirmed(id),
            Condition::AllOf(conditions) => conditions.iter().all(|c| c.matches(answers)),
            Condition::AnyOf(conditions) => conditions.iter().any(|c| c.matches(answers)),
        }
    }
}

/// One row of the triage decision table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRule {
    /// Tag identifying which rule fired, for logs and tests
    pub name: String,
    pub condition: Condition,
    pub verdict: Verdict,
}

impl TriageRule {
    pub fn new(name: impl Into<String>, condition: Condition, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            condition,
            verdict,
        }
    }
}
