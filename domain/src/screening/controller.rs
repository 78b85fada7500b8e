//! Session state machine

use super::answer::{Answer, AnswerValue};
use super::session::Session;
use crate::catalog::{Question, QuestionCatalog};
use crate::core::error::DomainError;
use crate::triage::{TriageEngine, Verdict};
use std::sync::Arc;

/// What a successful answer submission produced
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The session is still active; this is the next question to ask
    Next(Question),
    /// The catalog is exhausted; the screening ended with this verdict
    Completed(Verdict),
}

/// Drives a screening session through the catalog (state machine)
///
/// The controller owns the sequencing: callers supply one answer at a time,
/// the controller validates it against the current question, records it, and
/// either exposes the next question or, once the catalog is exhausted,
/// invokes the triage engine exactly once and completes the session.
///
/// # Example
///
/// ```
/// use navigator_domain::presets;
/// use navigator_domain::screening::{AnswerValue, SessionController, SubmitOutcome};
/// use std::sync::Arc;
///
/// let catalog = Arc::new(presets::clinic_catalog());
/// let controller = SessionController::new(Arc::clone(&catalog), presets::clinic_engine());
///
/// let mut session = controller.start();
/// assert_eq!(controller.current_question(&session).unwrap().id(), "fever");
///
/// let outcome = controller
///     .submit_answer(&mut session, AnswerValue::Flag(false))
///     .unwrap();
/// assert!(matches!(outcome, SubmitOutcome::Next(_)));
/// ```
pub struct SessionController {
    catalog: Arc<QuestionCatalog>,
    engine: TriageEngine,
}

impl SessionController {
    pub fn new(catalog: Arc<QuestionCatalog>, engine: TriageEngine) -> Self {
        Self { catalog, engine }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Start a fresh screening at the first question
    pub fn start(&self) -> Session {
        Session::new()
    }

    /// The question the session is currently waiting on.
    ///
    /// Fails with [`DomainError::InvalidSessionState`] once the screening is
    /// completed.
    pub fn current_question<'a>(&'a self, session: &Session) -> Result<&'a Question, DomainError> {
        if !session.is_active() {
            return Err(DomainError::InvalidSessionState);
        }
        // Active implies cursor < len: the catalog is non-empty and
        // submit_answer completes the session the moment the cursor
        // reaches the end.
        Ok(self
            .catalog
            .question_at(session.cursor())
            .expect("active session cursor within catalog"))
    }

    /// Validate and record an answer to the current question, advancing the
    /// session.
    ///
    /// A malformed value is rejected without touching the session; the
    /// caller re-prompts and resubmits. When the answer exhausts the
    /// catalog, the engine is evaluated once and the session completes.
    pub fn submit_answer(
        &self,
        session: &mut Session,
        value: AnswerValue,
    ) -> Result<SubmitOutcome, DomainError> {
        let question = self.current_question(session)?;
        question.validate(&value)?;
        let answer = Answer::new(question.id(), value);

        session.record(answer);

        if session.cursor() == self.catalog.len() {
            let verdict = self.engine.evaluate(session.answers());
            session.complete(verdict.clone());
            Ok(SubmitOutcome::Completed(verdict))
        } else {
            let next = self
                .catalog
                .question_at(session.cursor())
                .expect("advanced cursor within catalog")
                .clone();
            Ok(SubmitOutcome::Next(next))
        }
    }

    /// Discard all recorded state, returning the session to the first
    /// question — equivalent to a fresh [`start`](Self::start).
    pub fn reset(&self, session: &mut Session) {
        session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Question;
    use crate::triage::{Condition, RuleEngine, TriageRule};

    fn controller() -> SessionController {
        let catalog = Arc::new(
            QuestionCatalog::new(vec![
                Question::yes_no("fever", "Do you have a fever?"),
                Question::yes_no("cough", "Do you have a persistent cough?"),
                Question::free_text("notes", "Anything else?"),
            ])
            .unwrap(),
        );
        let engine = RuleEngine::new(
            vec![TriageRule::new(
                "fever-alone",
                Condition::affirmed("fever"),
                Verdict::clinic("See a clinician."),
            )],
            Verdict::rest("Rest up."),
        );
        SessionController::new(catalog, engine.into())
    }

    fn run_to_completion(controller: &SessionController, session: &mut Session) -> Verdict {
        controller
            .submit_answer(session, AnswerValue::Flag(true))
            .unwrap();
        controller
            .submit_answer(session, AnswerValue::Flag(false))
            .unwrap();
        match controller
            .submit_answer(session, AnswerValue::Text("none".into()))
            .unwrap()
        {
            SubmitOutcome::Completed(verdict) => verdict,
            SubmitOutcome::Next(q) => panic!("expected completion, got question {}", q.id()),
        }
    }

    #[test]
    fn test_exactly_n_submissions_complete_the_session() {
        let controller = controller();
        let mut session = controller.start();

        let outcome = controller
            .submit_answer(&mut session, AnswerValue::Flag(true))
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Next(ref q) if q.id() == "cough"));
        assert!(session.is_active());

        controller
            .submit_answer(&mut session, AnswerValue::Flag(false))
            .unwrap();
        let outcome = controller
            .submit_answer(&mut session, AnswerValue::Text("none".into()))
            .unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        assert!(!session.is_active());
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_submission_after_completion_fails() {
        let controller = controller();
        let mut session = controller.start();
        run_to_completion(&controller, &mut session);

        let err = controller
            .submit_answer(&mut session, AnswerValue::Flag(true))
            .unwrap_err();
        assert!(err.is_invalid_state());

        let err = controller.current_question(&session).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_malformed_answer_leaves_session_untouched() {
        let controller = controller();
        let mut session = controller.start();

        let err = controller
            .submit_answer(&mut session, AnswerValue::Text("yes".into()))
            .unwrap_err();
        assert!(err.is_malformed_answer());

        // Unchanged: still on the first question, nothing recorded
        assert_eq!(session.cursor(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(controller.current_question(&session).unwrap().id(), "fever");
    }

    #[test]
    fn test_answers_never_ahead_of_cursor() {
        let controller = controller();
        let mut session = controller.start();

        controller
            .submit_answer(&mut session, AnswerValue::Flag(true))
            .unwrap();
        assert_eq!(session.answers().len(), session.cursor());
        assert!(!session.answers().contains("cough"));
        assert!(!session.answers().contains("notes"));
    }

    #[test]
    fn test_engine_runs_once_and_verdict_is_stored() {
        let controller = controller();
        let mut session = controller.start();
        let verdict = run_to_completion(&controller, &mut session);

        assert_eq!(session.verdict(), Some(&verdict));
        assert_eq!(verdict.message, "See a clinician.");
    }

    #[test]
    fn test_reset_then_replay_reproduces_the_verdict() {
        let controller = controller();
        let mut session = controller.start();
        let first = run_to_completion(&controller, &mut session);

        controller.reset(&mut session);
        assert!(session.is_active());
        assert_eq!(controller.current_question(&session).unwrap().id(), "fever");

        let second = run_to_completion(&controller, &mut session);
        assert_eq!(first, second);
    }
}
