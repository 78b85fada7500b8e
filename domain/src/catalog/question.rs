//! Question value object

use crate::core::error::DomainError;
use crate::screening::AnswerValue;
use serde::{Deserialize, Serialize};

/// Kind of input a question accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerType {
    /// Expects a boolean answer
    YesNo,
    /// Expects exactly one of the listed options
    MultipleChoice { options: Vec<String> },
    /// Expects any string; kept for record-keeping, never scored
    FreeText,
}

impl AnswerType {
    /// Human-readable description of the expected input, used in
    /// [`DomainError::MalformedAnswer`] and input prompts.
    pub fn expects(&self) -> &'static str {
        match self {
            AnswerType::YesNo => "yes or no",
            AnswerType::MultipleChoice { .. } => "one of the listed options",
            AnswerType::FreeText => "free text",
        }
    }
}

/// A single screening question (Value Object)
///
/// Questions are defined once at catalog construction and never change
/// during a session. The `weight` only matters to the weighted scoring
/// strategy; rule-table deployments leave it at 0.
///
/// # Example
///
/// ```
/// use navigator_domain::catalog::Question;
///
/// let q = Question::yes_no("fever", "Do you have a fever?").with_weight(3);
/// assert_eq!(q.id(), "fever");
/// assert_eq!(q.weight(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    prompt: String,
    answer_type: AnswerType,
    #[serde(default)]
    weight: u32,
}

impl Question {
    /// Create a yes/no question
    pub fn yes_no(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            answer_type: AnswerType::YesNo,
            weight: 0,
        }
    }

    /// Create a multiple-choice question with ordered options
    pub fn multiple_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            answer_type: AnswerType::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
            weight: 0,
        }
    }

    /// Create a free-text question
    pub fn free_text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            answer_type: AnswerType::FreeText,
            weight: 0,
        }
    }

    /// Set the severity weight used by the weighted scoring strategy
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer_type(&self) -> &AnswerType {
        &self.answer_type
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The options of a multiple-choice question, empty otherwise
    pub fn options(&self) -> &[String] {
        match &self.answer_type {
            AnswerType::MultipleChoice { options } => options,
            _ => &[],
        }
    }

    /// Validate a submitted value against this question's answer type.
    ///
    /// YesNo expects a flag, MultipleChoice expects one of the listed
    /// options (exact match), FreeText accepts any text.
    pub fn validate(&self, value: &AnswerValue) -> Result<(), DomainError> {
        let ok = match (&self.answer_type, value) {
            (AnswerType::YesNo, AnswerValue::Flag(_)) => true,
            (AnswerType::MultipleChoice { options }, AnswerValue::Text(text)) => {
                options.iter().any(|o| o == text)
            }
            (AnswerType::FreeText, AnswerValue::Text(_)) => true,
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(DomainError::MalformedAnswer {
                question_id: self.id.clone(),
                expected: self.answer_type.expects(),
            })
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}
