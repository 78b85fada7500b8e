//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// The submitted value does not match the current question's answer type.
    /// The session is left untouched; the caller should resubmit.
    #[error("answer to '{question_id}' is malformed: expected {expected}")]
    MalformedAnswer {
        question_id: String,
        expected: &'static str,
    },

    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// `submit_answer` or `current_question` was called on a completed
    /// session. This indicates a caller bug and is never silently ignored.
    #[error("screening session is already completed")]
    InvalidSessionState,

    #[error("question catalog is empty")]
    EmptyCatalog,

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("multiple-choice question '{0}' has no options")]
    MissingOptions(String),
}

impl DomainError {
    /// Check if this error is a rejected answer (caller should re-prompt)
    pub fn is_malformed_answer(&self) -> bool {
        matches!(self, DomainError::MalformedAnswer { .. })
    }

    /// Check if this error indicates a call against a completed session
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, DomainError::InvalidSessionState)
    }
}
