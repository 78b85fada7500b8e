//! Application layer for symptom-navigator
//!
//! This crate contains use cases, port definitions, and screening
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ParsePresetError, ScreeningPreset};
pub use ports::answer_store::{AnswerRecord, AnswerStore, NoAnswerStore};
pub use use_cases::check_symptoms::{CheckSymptomsUseCase, SymptomReport};
pub use use_cases::run_screening::RunScreeningUseCase;
