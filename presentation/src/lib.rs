//! Presentation layer for symptom-navigator
//!
//! The chat/UI collaborator: renders questions and verdicts, collects raw
//! answer input, and defines the command-line surface. No decision logic
//! lives here; the core is driven, never second-guessed.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ScreeningRepl;
pub use cli::{Cli, OutputFormat, PresetArg};
pub use output::ConsoleFormatter;
