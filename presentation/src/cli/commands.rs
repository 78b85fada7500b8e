//! CLI command definitions

use clap::{ArgAction, Parser, ValueEnum};
use navigator_application::ScreeningPreset;
use std::path::PathBuf;

/// Output format for one-shot evaluations
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored verdict card with the full recommendation message
    Full,
    /// One line: recommendation and severity level
    Result,
    /// JSON output
    Json,
}

/// Screening preset selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PresetArg {
    /// Six yes/no questions, ordered rule table
    Clinic,
    /// Seven weighted questions, threshold scoring
    Intake,
}

impl From<PresetArg> for ScreeningPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Clinic => ScreeningPreset::Clinic,
            PresetArg::Intake => ScreeningPreset::Intake,
        }
    }
}

/// CLI arguments for symptom-navigator
#[derive(Parser, Debug)]
#[command(name = "symptom-navigator")]
#[command(version, about = "Symptom screening assistant - answer a few questions, get a triage recommendation")]
#[command(long_about = r#"
Symptom Navigator asks a short sequence of health screening questions and maps
your answers to one of three recommendations: rest at home, visit the campus
clinic, or seek urgent medical help.

Two modes:
  - One-shot: pass a JSON object of answers and get the recommendation back
  - Chat: an interactive question-per-turn screening (--chat)

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./navigator.toml      Project-level config
3. ~/.config/symptom-navigator/config.toml   Global config

Example:
  symptom-navigator '{"fever": true, "cough": true}'
  symptom-navigator --preset intake --output json '{"fever": true, "breathing": true}'
  symptom-navigator --chat
"#)]
pub struct Cli {
    /// JSON object of answers for a one-shot evaluation (not required in chat mode)
    pub answers: Option<String>,

    /// Start an interactive chat screening
    #[arg(short, long)]
    pub chat: bool,

    /// Screening preset (overrides the config file)
    #[arg(short, long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Output format for one-shot evaluations
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Path to a config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip all config files and use built-in defaults
    #[arg(long)]
    pub no_config: bool,

    /// Append captured answers to this JSONL file (overrides the config file)
    #[arg(long, value_name = "FILE")]
    pub answer_log: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banners and progress chatter
    #[arg(short, long)]
    pub quiet: bool,
}
