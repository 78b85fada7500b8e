//! Ordered, immutable question catalog

use super::question::{AnswerType, Question};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The ordered list of screening questions (Value Object)
///
/// The catalog is configuration, not an algorithm: it exists so the triage
/// engine and the session controller share one source of truth for question
/// identifiers, ordering, and weights. There is no mutation API:
/// reconfiguring a screening flow means constructing a new catalog.
///
/// # Example
///
/// ```
/// use navigator_domain::catalog::{Question, QuestionCatalog};
///
/// let catalog = QuestionCatalog::new(vec![
///     Question::yes_no("fever", "Do you have a fever?"),
///     Question::yes_no("cough", "Do you have a persistent cough?"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.question_at(0).unwrap().id(), "fever");
/// assert!(catalog.contains("cough"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog, validating that it is non-empty, that question ids
    /// are unique, and that every multiple-choice question lists options.
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().to_string()) {
                return Err(DomainError::DuplicateQuestion(question.id().to_string()));
            }
            if let AnswerType::MultipleChoice { options } = question.answer_type()
                && options.is_empty()
            {
                return Err(DomainError::MissingOptions(question.id().to_string()));
            }
        }

        Ok(Self { questions })
    }

    /// The question at `index`, in asking order
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in the catalog
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Read-only view of all questions in asking order
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    /// Look a question up by id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Whether a question with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
