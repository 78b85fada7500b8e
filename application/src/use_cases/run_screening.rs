//! Run Screening use case.
//!
//! Drives the conversational flow: start a session, feed it one answer per
//! turn, and surface either the next question or the final verdict. After
//! each accepted answer the configured [`AnswerStore`] is handed the
//! captured record.

use crate::ports::answer_store::{AnswerRecord, AnswerStore, NoAnswerStore};
use navigator_domain::{
    AnswerValue, DomainError, Question, QuestionCatalog, Session, SessionController, SubmitOutcome,
    TriageEngine,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for running one turn-based screening conversation
pub struct RunScreeningUseCase {
    controller: SessionController,
    store: Arc<dyn AnswerStore>,
}

impl RunScreeningUseCase {
    pub fn new(catalog: Arc<QuestionCatalog>, engine: TriageEngine) -> Self {
        Self {
            controller: SessionController::new(catalog, engine),
            store: Arc::new(NoAnswerStore),
        }
    }

    /// Attach a persistence collaborator
    pub fn with_answer_store(mut self, store: Arc<dyn AnswerStore>) -> Self {
        self.store = store;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.controller.catalog()
    }

    /// Start a new screening and return the session with its first question
    pub fn start(&self) -> (Session, Question) {
        let session = self.controller.start();
        let first = self
            .controller
            .current_question(&session)
            .expect("fresh session has a current question")
            .clone();
        info!(session = %session.id(), "screening started");
        (session, first)
    }

    pub fn current_question<'a>(&'a self, session: &Session) -> Result<&'a Question, DomainError> {
        self.controller.current_question(session)
    }

    /// Submit the answer to the current question.
    ///
    /// On success the captured answer is handed to the answer store; a
    /// rejected answer records nothing and leaves the session unchanged.
    pub fn submit(
        &self,
        session: &mut Session,
        value: AnswerValue,
    ) -> Result<SubmitOutcome, DomainError> {
        let question_id = self.controller.current_question(session)?.id().to_string();
        let outcome = self.controller.submit_answer(session, value)?;

        if let Some(answer) = session.answers().get(&question_id) {
            self.store.record(AnswerRecord::new(session.id(), answer));
        }
        debug!(session = %session.id(), question = %question_id, "answer recorded");

        if let SubmitOutcome::Completed(verdict) = &outcome {
            info!(
                session = %session.id(),
                result = %verdict.label,
                level = %verdict.severity,
                "screening completed"
            );
        }
        Ok(outcome)
    }

    /// Restart the screening from the first question
    pub fn reset(&self, session: &mut Session) -> Question {
        self.controller.reset(session);
        info!(session = %session.id(), "screening reset");
        self.controller
            .current_question(session)
            .expect("fresh session has a current question")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_domain::presets;
    use navigator_domain::{Severity, TriageLabel};
    use std::sync::Mutex;

    struct RecordingStore {
        records: Mutex<Vec<AnswerRecord>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl AnswerStore for RecordingStore {
        fn record(&self, record: AnswerRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    fn clinic_use_case() -> RunScreeningUseCase {
        let (catalog, engine) = (Arc::new(presets::clinic_catalog()), presets::clinic_engine());
        RunScreeningUseCase::new(catalog, engine)
    }

    #[test]
    fn test_full_conversation_reaches_verdict() {
        let use_case = clinic_use_case();
        let (mut session, first) = use_case.start();
        assert_eq!(first.id(), "fever");

        // Answer "no" to everything except chest pain
        let answers = [false, true, false, false, false, false];
        let mut last = None;
        for flag in answers {
            last = Some(use_case.submit(&mut session, AnswerValue::Flag(flag)).unwrap());
        }

        match last.unwrap() {
            SubmitOutcome::Completed(verdict) => {
                assert_eq!(verdict.label, TriageLabel::SeekUrgentCare);
                assert_eq!(verdict.severity, Severity::Red);
            }
            SubmitOutcome::Next(q) => panic!("expected completion, got {}", q.id()),
        }
    }

    #[test]
    fn test_store_receives_one_record_per_accepted_answer() {
        let store = Arc::new(RecordingStore::new());
        let use_case = clinic_use_case().with_answer_store(Arc::clone(&store) as Arc<dyn AnswerStore>);

        let (mut session, _) = use_case.start();
        use_case.submit(&mut session, AnswerValue::Flag(true)).unwrap();

        // Rejected answers are not stored
        let err = use_case
            .submit(&mut session, AnswerValue::Text("maybe".into()))
            .unwrap_err();
        assert!(err.is_malformed_answer());

        use_case.submit(&mut session, AnswerValue::Flag(false)).unwrap();

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question_id, "fever");
        assert_eq!(records[1].question_id, "chestPain");
        assert!(records.iter().all(|r| r.session_id == session.id()));
    }

    #[test]
    fn test_reset_returns_first_question() {
        let use_case = clinic_use_case();
        let (mut session, _) = use_case.start();
        use_case.submit(&mut session, AnswerValue::Flag(true)).unwrap();

        let first = use_case.reset(&mut session);
        assert_eq!(first.id(), "fever");
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_submit_after_completion_is_a_caller_bug() {
        let use_case = clinic_use_case();
        let (mut session, _) = use_case.start();
        for _ in 0..6 {
            use_case.submit(&mut session, AnswerValue::Flag(false)).unwrap();
        }

        let err = use_case
            .submit(&mut session, AnswerValue::Flag(false))
            .unwrap_err();
        assert!(err.is_invalid_state());
    }
}
