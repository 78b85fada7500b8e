//! Check Symptoms use case.
//!
//! The one-shot boundary call: a flat mapping of question ids to raw
//! answer values goes in, a triage report comes out. Unknown keys are
//! ignored, missing keys are unanswered, and a malformed payload degrades
//! to a safe default recommendation: health-guidance tooling should never
//! leave the caller with no guidance at all.

use navigator_domain::{
    Answer, AnswerSet, AnswerValue, QuestionCatalog, Severity, TriageEngine, TriageLabel, Verdict,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The boundary-facing triage result
///
/// Serializes to `{"result": ..., "level": "green"|"yellow"|"red",
/// "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub result: String,
    pub level: Severity,
    pub message: String,
}

impl SymptomReport {
    /// The safe default returned when a payload cannot be understood
    pub fn fallback() -> Self {
        Self {
            result: TriageLabel::VisitClinic.to_string(),
            level: Severity::Yellow,
            message: "Unable to process your symptoms. Please consult a healthcare professional."
                .to_string(),
        }
    }
}

impl From<Verdict> for SymptomReport {
    fn from(verdict: Verdict) -> Self {
        Self {
            result: verdict.label.to_string(),
            level: verdict.severity,
            message: verdict.message,
        }
    }
}

/// Use case for evaluating a complete or partial answer mapping in one call
pub struct CheckSymptomsUseCase {
    catalog: Arc<QuestionCatalog>,
    engine: TriageEngine,
}

impl CheckSymptomsUseCase {
    pub fn new(catalog: Arc<QuestionCatalog>, engine: TriageEngine) -> Self {
        Self { catalog, engine }
    }

    /// Evaluate a flat `question id → value` mapping.
    ///
    /// Keys the catalog does not know and values that are neither boolean
    /// nor string are dropped; whatever remains is evaluated best-effort.
    pub fn evaluate_values(&self, values: &Map<String, Value>) -> SymptomReport {
        let mut answers = AnswerSet::new();

        for (key, raw) in values {
            if !self.catalog.contains(key) {
                debug!(question = %key, "dropping answer for unknown question");
                continue;
            }
            match AnswerValue::from_json(raw) {
                Some(value) => {
                    answers.insert(Answer::new(key.clone(), value));
                }
                None => {
                    debug!(question = %key, "ignoring non-boolean, non-string answer value");
                }
            }
        }

        let verdict = self.engine.evaluate(&answers);
        info!(
            strategy = self.engine.strategy_name(),
            answered = answers.len(),
            result = %verdict.label,
            level = %verdict.severity,
            "symptom check evaluated"
        );
        verdict.into()
    }

    /// Evaluate a raw JSON payload.
    ///
    /// Accepts either the flat mapping or the chat client's
    /// `{"answers": {...}}` wrapper. A payload that does not parse as a
    /// JSON object degrades to [`SymptomReport::fallback`].
    pub fn evaluate_json(&self, payload: &str) -> SymptomReport {
        let parsed: Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "malformed symptom payload, returning safe default");
                return SymptomReport::fallback();
            }
        };

        let object = match parsed {
            Value::Object(map) => map,
            _ => {
                warn!("symptom payload is not a JSON object, returning safe default");
                return SymptomReport::fallback();
            }
        };

        // The chat client posts {"answers": {...}}; unwrap it
        if object.len() == 1
            && let Some(Value::Object(inner)) = object.get("answers")
        {
            return self.evaluate_values(inner);
        }

        self.evaluate_values(&object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_domain::presets;
    use serde_json::json;

    fn use_case() -> CheckSymptomsUseCase {
        CheckSymptomsUseCase::new(Arc::new(presets::clinic_catalog()), presets::clinic_engine())
    }

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_chest_pain_escalates() {
        let report = use_case().evaluate_values(&as_map(json!({"chestPain": true})));
        assert_eq!(report.result, "Seek urgent medical help");
        assert_eq!(report.level, Severity::Red);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let report = use_case().evaluate_values(&as_map(json!({
            "fever": true,
            "wingPain": true,
            "studentId": "s123"
        })));
        // fever alone: yellow, unknown keys never escalate
        assert_eq!(report.level, Severity::Yellow);
    }

    #[test]
    fn test_empty_mapping_is_green() {
        let report = use_case().evaluate_values(&Map::new());
        assert_eq!(report.result, "Rest at home");
        assert_eq!(report.level, Severity::Green);
    }

    #[test]
    fn test_non_scalar_values_are_unanswered() {
        let report = use_case().evaluate_values(&as_map(json!({
            "chestPain": {"nested": true},
            "fever": 1
        })));
        assert_eq!(report.level, Severity::Green);
    }

    #[test]
    fn test_malformed_payload_degrades_to_safe_default() {
        let report = use_case().evaluate_json("{not json");
        assert_eq!(report, SymptomReport::fallback());
        assert_eq!(report.level, Severity::Yellow);

        let report = use_case().evaluate_json("[1, 2, 3]");
        assert_eq!(report, SymptomReport::fallback());
    }

    #[test]
    fn test_wrapped_answers_object_is_unwrapped() {
        let report = use_case().evaluate_json(r#"{"answers": {"chestPain": true}}"#);
        assert_eq!(report.level, Severity::Red);
    }

    #[test]
    fn test_report_wire_format() {
        let report = use_case().evaluate_json(r#"{"fever": true}"#);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"], "Visit campus clinic");
        assert_eq!(json["level"], "yellow");
        assert!(json["message"].as_str().unwrap().contains("campus clinic"));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let uc = use_case();
        let payload = r#"{"fever": true, "cough": true}"#;
        assert_eq!(uc.evaluate_json(payload), uc.evaluate_json(payload));
    }
}
