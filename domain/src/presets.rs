//! Canonical screening presets
//!
//! Two deployments of the same contract, never merged:
//!
//! - **clinic** — six yes/no questions evaluated by an ordered rule table
//! - **intake** — seven weighted questions (including a multiple-choice
//!   pain scale and free-text record-keeping) scored against an
//!   escalation threshold

use crate::catalog::{Question, QuestionCatalog};
use crate::triage::{Condition, RuleEngine, TriageEngine, TriageRule, Verdict, WeightedEngine};
use std::sync::Arc;

/// Risk score at or above which the intake screening escalates
pub const INTAKE_ESCALATE_THRESHOLD: u32 = 6;

/// The six-question clinic screening catalog
pub fn clinic_catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        Question::yes_no("fever", "Do you have a fever?"),
        Question::yes_no("chestPain", "Are you experiencing chest pain or difficulty breathing?"),
        Question::yes_no("severeHeadache", "Do you have a severe headache?"),
        Question::yes_no("nausea", "Are you feeling nauseous or vomiting?"),
        Question::yes_no("cough", "Do you have a persistent cough?"),
        Question::yes_no("fatigue", "Are you feeling unusually tired or weak?"),
    ])
    .expect("clinic catalog is valid")
}

/// The ordered rule table for the clinic screening
///
/// Priority runs top to bottom; the first matching rule decides.
pub fn clinic_engine() -> TriageEngine {
    RuleEngine::new(
        vec![
            TriageRule::new(
                "chest-pain",
                Condition::affirmed("chestPain"),
                Verdict::urgent(
                    "Chest pain can be serious. Please seek immediate medical attention \
                     or call emergency services.",
                ),
            ),
            TriageRule::new(
                "fever-with-severe-headache",
                Condition::all_of([
                    Condition::affirmed("fever"),
                    Condition::affirmed("severeHeadache"),
                ]),
                Verdict::urgent(
                    "The combination of fever and severe headache requires immediate \
                     medical evaluation.",
                ),
            ),
            TriageRule::new(
                "systemic-symptoms",
                Condition::any_of([
                    Condition::affirmed("fever"),
                    Condition::all_of([
                        Condition::affirmed("nausea"),
                        Condition::affirmed("severeHeadache"),
                    ]),
                ]),
                Verdict::clinic(
                    "Your symptoms suggest you should see a healthcare professional. \
                     Visit your campus clinic for proper evaluation.",
                ),
            ),
            TriageRule::new(
                "cough-with-secondary",
                Condition::all_of([
                    Condition::affirmed("cough"),
                    Condition::any_of([
                        Condition::affirmed("fever"),
                        Condition::affirmed("fatigue"),
                    ]),
                ]),
                Verdict::clinic(
                    "Your combination of symptoms warrants medical attention. Consider \
                     visiting the campus clinic.",
                ),
            ),
            TriageRule::new(
                "moderate-symptom",
                Condition::any_of([
                    Condition::affirmed("cough"),
                    Condition::affirmed("nausea"),
                    Condition::affirmed("severeHeadache"),
                ]),
                Verdict::clinic(
                    "Your symptoms may benefit from professional medical advice. \
                     Consider visiting the campus clinic.",
                ),
            ),
        ],
        Verdict::rest(
            "Your symptoms appear mild. Get plenty of rest, stay hydrated, and monitor \
             your condition. Seek medical care if symptoms worsen.",
        ),
    )
    .into()
}

/// The seven-question weighted intake catalog
pub fn intake_catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        Question::yes_no("fever", "Are you experiencing any fever or high temperature?")
            .with_weight(3),
        Question::yes_no("breathing", "Do you have difficulty breathing or shortness of breath?")
            .with_weight(4),
        Question::yes_no("chestPain", "Are you experiencing chest pain or discomfort?")
            .with_weight(4),
        Question::multiple_choice(
            "painLevel",
            "How would you rate your current pain level?",
            ["No pain (0)", "Mild (1-3)", "Moderate (4-6)", "Severe (7-10)"],
        )
        .with_weight(2),
        Question::yes_no("appetite", "Have you had any recent changes in your appetite or weight?")
            .with_weight(1),
        Question::free_text(
            "medications",
            "Are you taking any medications or have any known allergies?",
        )
        .with_weight(1),
        Question::free_text(
            "notes",
            "Is there anything else about your current health condition you'd like to mention?",
        )
        .with_weight(1),
    ])
    .expect("intake catalog is valid")
}

/// The weighted scorer for the intake screening
pub fn intake_engine(catalog: Arc<QuestionCatalog>) -> TriageEngine {
    WeightedEngine::new(
        catalog,
        INTAKE_ESCALATE_THRESHOLD,
        Verdict::urgent(
            "Based on your responses, I recommend seeking immediate medical attention. \
             Please visit a hospital or contact your healthcare provider.",
        ),
        Verdict::rest(
            "Based on your responses, it appears you may benefit from rest and monitoring \
             your symptoms. However, if symptoms worsen, please seek medical attention.",
        ),
    )
    .with_option_weight("Severe", 4)
    .with_option_weight("Moderate", 2)
    .with_option_weight("Mild", 1)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::{Answer, AnswerSet, AnswerValue};
    use crate::triage::{Severity, TriageLabel};

    fn flags(affirmed: &[&str]) -> AnswerSet {
        affirmed
            .iter()
            .map(|id| Answer::new(*id, AnswerValue::Flag(true)))
            .collect()
    }

    #[test]
    fn test_clinic_catalog_order() {
        let catalog = clinic_catalog();
        let ids: Vec<&str> = catalog.iter().map(|q| q.id()).collect();
        assert_eq!(
            ids,
            ["fever", "chestPain", "severeHeadache", "nausea", "cough", "fatigue"]
        );
    }

    #[test]
    fn test_chest_pain_alone_is_red() {
        let verdict = clinic_engine().evaluate(&flags(&["chestPain"]));
        assert_eq!(verdict.label, TriageLabel::SeekUrgentCare);
        assert_eq!(verdict.severity, Severity::Red);
    }

    #[test]
    fn test_fever_with_severe_headache_is_red() {
        let verdict = clinic_engine().evaluate(&flags(&["fever", "severeHeadache"]));
        assert_eq!(verdict.severity, Severity::Red);
        assert!(verdict.message.contains("fever and severe headache"));
    }

    #[test]
    fn test_fever_alone_is_yellow() {
        let verdict = clinic_engine().evaluate(&flags(&["fever"]));
        assert_eq!(verdict.label, TriageLabel::VisitClinic);
        assert_eq!(verdict.severity, Severity::Yellow);
    }

    #[test]
    fn test_nausea_with_severe_headache_is_yellow() {
        let verdict = clinic_engine().evaluate(&flags(&["nausea", "severeHeadache"]));
        assert_eq!(verdict.severity, Severity::Yellow);
    }

    #[test]
    fn test_cough_with_fatigue_is_yellow() {
        let verdict = clinic_engine().evaluate(&flags(&["cough", "fatigue"]));
        assert_eq!(verdict.label, TriageLabel::VisitClinic);
        assert_eq!(verdict.severity, Severity::Yellow);
    }

    #[test]
    fn test_single_moderate_symptom_is_yellow() {
        for id in ["cough", "nausea", "severeHeadache"] {
            let verdict = clinic_engine().evaluate(&flags(&[id]));
            assert_eq!(verdict.severity, Severity::Yellow, "symptom {id}");
        }
        // fatigue alone carries no rule
        let verdict = clinic_engine().evaluate(&flags(&["fatigue"]));
        assert_eq!(verdict.severity, Severity::Green);
    }

    #[test]
    fn test_no_symptoms_is_green() {
        let verdict = clinic_engine().evaluate(&AnswerSet::new());
        assert_eq!(verdict.label, TriageLabel::RestAtHome);
        assert_eq!(verdict.severity, Severity::Green);
    }

    #[test]
    fn test_red_beats_yellow_when_both_match() {
        // fever matches both the red pair rule and the yellow systemic rule
        let verdict = clinic_engine().evaluate(&flags(&["fever", "severeHeadache", "cough"]));
        assert_eq!(verdict.severity, Severity::Red);
    }

    #[test]
    fn test_intake_weights() {
        let catalog = intake_catalog();
        assert_eq!(catalog.get("fever").unwrap().weight(), 3);
        assert_eq!(catalog.get("breathing").unwrap().weight(), 4);
        assert_eq!(catalog.get("chestPain").unwrap().weight(), 4);
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_intake_threshold_scenarios() {
        let catalog = Arc::new(intake_catalog());
        let engine = intake_engine(catalog);

        // fever(3) + breathing(4) = 7 >= 6
        let verdict = engine.evaluate(&flags(&["fever", "breathing"]));
        assert_eq!(verdict.severity, Severity::Red);

        // fever(3) < 6
        let verdict = engine.evaluate(&flags(&["fever"]));
        assert_eq!(verdict.severity, Severity::Green);
    }

    #[test]
    fn test_intake_free_text_never_escalates() {
        let catalog = Arc::new(intake_catalog());
        let engine = intake_engine(catalog);

        let answers: AnswerSet = [
            Answer::new("medications", AnswerValue::Text("ibuprofen".into())),
            Answer::new("notes", AnswerValue::Text("chest hurts a lot".into())),
        ]
        .into_iter()
        .collect();
        assert_eq!(engine.evaluate(&answers).severity, Severity::Green);
    }
}
