//! Port for persisting captured answers.
//!
//! Persistence is an optional collaborator: the core neither depends on nor
//! requires storage to function. After each accepted answer the screening
//! use case hands the store one `(question_id, value, captured_at)` tuple
//! tagged with the session id.
//!
//! The `record` method is intentionally synchronous and non-fallible;
//! storage failures must never disrupt a screening in progress.

use chrono::{DateTime, Utc};
use navigator_domain::{Answer, AnswerValue};
use serde::Serialize;
use uuid::Uuid;

/// One captured answer, ready to store
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecord {
    pub session_id: Uuid,
    pub question_id: String,
    pub value: AnswerValue,
    pub captured_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(session_id: Uuid, answer: &Answer) -> Self {
        Self {
            session_id,
            question_id: answer.question_id().to_string(),
            value: answer.value().clone(),
            captured_at: answer.captured_at(),
        }
    }
}

/// Port for recording answers to a store
pub trait AnswerStore: Send + Sync {
    /// Record one captured answer
    fn record(&self, record: AnswerRecord);
}

/// No-op implementation for tests and when persistence is disabled
pub struct NoAnswerStore;

impl AnswerStore for NoAnswerStore {
    fn record(&self, _record: AnswerRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_answer() {
        let session_id = Uuid::new_v4();
        let answer = Answer::new("fever", AnswerValue::Flag(true));
        let record = AnswerRecord::new(session_id, &answer);

        assert_eq!(record.session_id, session_id);
        assert_eq!(record.question_id, "fever");
        assert_eq!(record.value, AnswerValue::Flag(true));
    }

    #[test]
    fn test_record_serializes_flat() {
        let answer = Answer::new("painLevel", AnswerValue::Text("Mild (1-3)".into()));
        let record = AnswerRecord::new(Uuid::new_v4(), &answer);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["question_id"], "painLevel");
        assert_eq!(json["value"], "Mild (1-3)");
    }
}
