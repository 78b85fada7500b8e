//! Screening configuration
//!
//! A deployment picks exactly one preset: one catalog with its matching
//! evaluation strategy. The two observed rule tables are intentionally
//! never merged.

use navigator_domain::{QuestionCatalog, TriageEngine, presets};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Error returned when parsing a preset name
#[derive(Error, Debug)]
#[error("unknown screening preset '{0}' (expected 'clinic' or 'intake')")]
pub struct ParsePresetError(String);

/// Which screening deployment to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningPreset {
    /// Six yes/no questions, ordered rule table
    #[default]
    Clinic,
    /// Seven weighted questions, threshold scoring
    Intake,
}

impl ScreeningPreset {
    /// Build the catalog and engine for this preset
    pub fn build(self) -> (Arc<QuestionCatalog>, TriageEngine) {
        match self {
            ScreeningPreset::Clinic => {
                (Arc::new(presets::clinic_catalog()), presets::clinic_engine())
            }
            ScreeningPreset::Intake => {
                let catalog = Arc::new(presets::intake_catalog());
                let engine = presets::intake_engine(Arc::clone(&catalog));
                (catalog, engine)
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScreeningPreset::Clinic => "clinic (yes/no questions, ordered rules)",
            ScreeningPreset::Intake => "intake (weighted questions, threshold score)",
        }
    }
}

impl std::fmt::Display for ScreeningPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreeningPreset::Clinic => write!(f, "clinic"),
            ScreeningPreset::Intake => write!(f, "intake"),
        }
    }
}

impl std::str::FromStr for ScreeningPreset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clinic" => Ok(ScreeningPreset::Clinic),
            "intake" => Ok(ScreeningPreset::Intake),
            other => Err(ParsePresetError(other.to_string())),
        }
    }
}
