//! Screening session entity

use super::answer::{Answer, AnswerSet};
use crate::triage::Verdict;
use uuid::Uuid;

/// The two states a screening can be in
///
/// There is no error state: malformed input is rejected at the boundary and
/// leaves the session where it was. The verdict lives inside `Completed`, so
/// "verdict present iff completed" holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreeningState {
    Active,
    Completed(Verdict),
}

/// The state of one screening conversation (Entity)
///
/// Owned exclusively by one logical conversation and mutated only through
/// [`SessionController`](super::SessionController) transitions. The cursor
/// is always a valid catalog index or equal to the catalog length
/// ("exhausted"), and `answers` never holds an entry for a question the
/// session has not yet reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: Uuid,
    cursor: usize,
    answers: AnswerSet,
    state: ScreeningState,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            cursor: 0,
            answers: AnswerSet::new(),
            state: ScreeningState::Active,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Index of the current question, or the catalog length once exhausted
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn state(&self) -> &ScreeningState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ScreeningState::Active)
    }

    /// The verdict, present exactly when the screening is completed
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.state {
            ScreeningState::Active => None,
            ScreeningState::Completed(verdict) => Some(verdict),
        }
    }

    pub(crate) fn record(&mut self, answer: Answer) {
        self.answers.insert(answer);
        self.cursor += 1;
    }

    pub(crate) fn complete(&mut self, verdict: Verdict) {
        self.state = ScreeningState::Completed(verdict);
    }

    pub(crate) fn reset(&mut self) {
        *self = Session::new();
    }
}
