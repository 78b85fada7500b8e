//! CLI surface

mod commands;

pub use commands::{Cli, OutputFormat, PresetArg};
