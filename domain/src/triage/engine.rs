//! Triage evaluation strategies

use super::rule::TriageRule;
use super::verdict::Verdict;
use crate::catalog::{AnswerType, QuestionCatalog};
use crate::screening::{AnswerSet, AnswerValue};
use std::sync::Arc;

/// Ordered rule-table strategy
///
/// Rules are evaluated in priority order; the first matching rule wins. The
/// `fallback` verdict is the unconditional final rule, so evaluation always
/// terminates with a verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEngine {
    rules: Vec<TriageRule>,
    fallback: Verdict,
}

impl RuleEngine {
    pub fn new(rules: Vec<TriageRule>, fallback: Verdict) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Verdict {
        &self.fallback
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Verdict {
        for rule in &self.rules {
            if rule.condition.matches(answers) {
                return rule.verdict.clone();
            }
        }
        self.fallback.clone()
    }
}

/// Weighted-score strategy
///
/// Sums the catalog weight of every affirmatively answered yes/no question
/// plus the option weight of every multiple-choice answer (matched by label
/// substring, e.g. "Severe" in "Severe (7-10)"). Free-text answers
/// contribute 0, and answers for ids the catalog does not know are dropped
/// silently.
///
/// One threshold splits escalate/rest; an optional lower second threshold
/// adds the clinic band in between. Thresholds are checked highest first,
/// so a score reaching both always takes the higher severity.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEngine {
    catalog: Arc<QuestionCatalog>,
    option_weights: Vec<(String, u32)>,
    escalate_threshold: u32,
    escalate_verdict: Verdict,
    clinic_band: Option<(u32, Verdict)>,
    rest_verdict: Verdict,
}

impl WeightedEngine {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        escalate_threshold: u32,
        escalate_verdict: Verdict,
        rest_verdict: Verdict,
    ) -> Self {
        Self {
            catalog,
            option_weights: Vec::new(),
            escalate_threshold,
            escalate_verdict,
            clinic_band: None,
            rest_verdict,
        }
    }

    /// Map multiple-choice option labels (by substring) to score
    /// contributions, e.g. `("Severe", 4)`.
    pub fn with_option_weight(mut self, label: impl Into<String>, weight: u32) -> Self {
        self.option_weights.push((label.into(), weight));
        self
    }

    /// Add a middle tier: scores in `clinic_threshold..escalate_threshold`
    /// produce this verdict instead of the rest verdict.
    pub fn with_clinic_band(mut self, clinic_threshold: u32, verdict: Verdict) -> Self {
        self.clinic_band = Some((clinic_threshold, verdict));
        self
    }

    /// The summed symptom score for an answer set.
    ///
    /// Adding an affirmative answer never decreases this sum.
    pub fn score(&self, answers: &AnswerSet) -> u32 {
        answers
            .iter()
            .filter_map(|answer| {
                let question = self.catalog.get(answer.question_id())?;
                match (question.answer_type(), answer.value()) {
                    (AnswerType::YesNo, AnswerValue::Flag(true)) => Some(question.weight()),
                    (AnswerType::MultipleChoice { .. }, AnswerValue::Text(label)) => self
                        .option_weights
                        .iter()
                        .find(|(needle, _)| label.contains(needle))
                        .map(|(_, weight)| *weight),
                    _ => None,
                }
            })
            .sum()
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Verdict {
        let score = self.score(answers);

        if score >= self.escalate_threshold {
            return self.escalate_verdict.clone();
        }
        if let Some((threshold, verdict)) = &self.clinic_band
            && score >= *threshold
        {
            return verdict.clone();
        }
        self.rest_verdict.clone()
    }
}

/// The triage decision engine — a pure function of the answer set
///
/// One deployment runs exactly one strategy; both satisfy the same
/// contract: total (any answer set, including the empty one, yields a
/// verdict), deterministic, and tolerant of partial input (missing answers
/// are "not affirmed", never an error).
///
/// # Example
///
/// ```
/// use navigator_domain::presets;
/// use navigator_domain::screening::{Answer, AnswerSet, AnswerValue};
/// use navigator_domain::triage::Severity;
///
/// let engine = presets::clinic_engine();
/// let answers: AnswerSet = [Answer::new("chestPain", AnswerValue::Flag(true))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(engine.evaluate(&answers).severity, Severity::Red);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TriageEngine {
    Rules(RuleEngine),
    Weighted(WeightedEngine),
}

impl TriageEngine {
    /// Map the collected answers to a verdict
    pub fn evaluate(&self, answers: &AnswerSet) -> Verdict {
        match self {
            TriageEngine::Rules(engine) => engine.evaluate(answers),
            TriageEngine::Weighted(engine) => engine.evaluate(answers),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            TriageEngine::Rules(_) => "rules",
            TriageEngine::Weighted(_) => "weighted",
        }
    }
}

impl From<RuleEngine> for TriageEngine {
    fn from(engine: RuleEngine) -> Self {
        TriageEngine::Rules(engine)
    }
}

impl From<WeightedEngine> for TriageEngine {
    fn from(engine: WeightedEngine) -> Self {
        TriageEngine::Weighted(engine)
    }
}
