//! Triage verdict types

use serde::{Deserialize, Serialize};

/// Urgency tier attached to a verdict
///
/// Tiers are totally ordered (`Green < Yellow < Red`), which is what lets
/// tie-breaks favor the higher severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Green => write!(f, "green"),
            Severity::Yellow => write!(f, "yellow"),
            Severity::Red => write!(f, "red"),
        }
    }
}

/// The recommendation a screening ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLabel {
    RestAtHome,
    VisitClinic,
    SeekUrgentCare,
}

impl std::fmt::Display for TriageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriageLabel::RestAtHome => write!(f, "Rest at home"),
            TriageLabel::VisitClinic => write!(f, "Visit campus clinic"),
            TriageLabel::SeekUrgentCare => write!(f, "Seek urgent medical help"),
        }
    }
}

/// The final triage recommendation (Value Object)
///
/// # Example
///
/// ```
/// use navigator_domain::triage::{Severity, TriageLabel, Verdict};
///
/// let verdict = Verdict::urgent("Please seek immediate medical attention.");
/// assert_eq!(verdict.label, TriageLabel::SeekUrgentCare);
/// assert_eq!(verdict.severity, Severity::Red);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: TriageLabel,
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    pub fn new(label: TriageLabel, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            label,
            severity,
            message: message.into(),
        }
    }

    /// A red-tier "seek urgent medical help" verdict
    pub fn urgent(message: impl Into<String>) -> Self {
        Self::new(TriageLabel::SeekUrgentCare, Severity::Red, message)
    }

    /// A yellow-tier "visit campus clinic" verdict
    pub fn clinic(message: impl Into<String>) -> Self {
        Self::new(TriageLabel::VisitClinic, Severity::Yellow, message)
    }

    /// A green-tier "rest at home" verdict
    pub fn rest(message: impl Into<String>) -> Self {
        Self::new(TriageLabel::RestAtHome, Severity::Green, message)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.label, self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Green < Severity::Yellow);
        assert!(Severity::Yellow < Severity::Red);
        assert_eq!(
            [Severity::Red, Severity::Green, Severity::Yellow]
                .into_iter()
                .max(),
            Some(Severity::Red)
        );
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_string(&Severity::Yellow).unwrap(), "\"yellow\"");
        let parsed: Severity = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, Severity::Red);
    }

    #[test]
    fn test_label_display_matches_recommendations() {
        assert_eq!(TriageLabel::RestAtHome.to_string(), "Rest at home");
        assert_eq!(TriageLabel::VisitClinic.to_string(), "Visit campus clinic");
        assert_eq!(
            TriageLabel::SeekUrgentCare.to_string(),
            "Seek urgent medical help"
        );
    }

    #[test]
    fn test_verdict_constructors() {
        assert_eq!(Verdict::rest("ok").severity, Severity::Green);
        assert_eq!(Verdict::clinic("go").label, TriageLabel::VisitClinic);
        assert_eq!(Verdict::urgent("now").to_string(), "Seek urgent medical help [red]");
    }
}
