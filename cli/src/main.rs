//! CLI entrypoint for Symptom Navigator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use navigator_application::{
    AnswerStore, CheckSymptomsUseCase, NoAnswerStore, RunScreeningUseCase, ScreeningPreset,
};
use navigator_infrastructure::{ConfigLoader, JsonlAnswerStore};
use navigator_presentation::{Cli, ConsoleFormatter, OutputFormat, ScreeningRepl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting symptom-navigator");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    // CLI flags override the config file
    let preset: ScreeningPreset = cli.preset.map(Into::into).unwrap_or(config.screening.preset);
    let answer_log = cli.answer_log.clone().or(config.log.answer_log.clone());

    info!(%preset, "screening preset selected");

    // === Dependency Injection ===
    let (catalog, engine) = preset.build();

    let store: Arc<dyn AnswerStore> = match &answer_log {
        Some(path) => match JsonlAnswerStore::new(path) {
            Some(store) => Arc::new(store),
            None => {
                warn!("answer log unavailable, continuing without persistence");
                Arc::new(NoAnswerStore)
            }
        },
        None => Arc::new(NoAnswerStore),
    };

    // Chat mode
    if cli.chat {
        let use_case = RunScreeningUseCase::new(catalog, engine).with_answer_store(store);
        let repl = ScreeningRepl::new(use_case).with_banner(!cli.quiet);
        repl.run()?;
        return Ok(());
    }

    // One-shot mode - an answer payload is required
    let payload = match cli.answers {
        Some(p) => p,
        None => bail!("Pass a JSON answer object, or use --chat for an interactive screening."),
    };

    let use_case = CheckSymptomsUseCase::new(catalog, engine);
    let report = use_case.evaluate_json(&payload);

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format_report(&report),
        OutputFormat::Result => ConsoleFormatter::format_report_line(&report),
        OutputFormat::Json => ConsoleFormatter::format_report_json(&report),
    };

    println!("{}", output);

    Ok(())
}
