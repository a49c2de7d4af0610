//! CLI entrypoint for huddle
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use huddle_application::{RunMeetingInput, RunMeetingUseCase};
use huddle_domain::OutputFormat as ReportFormat;
use huddle_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger};
use huddle_presentation::{Cli, ConsoleFormatter, LiveProgress, OutputFormatter};
use rand::SeedableRng;
use rand::rngs::StdRng;
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

    // stdout carries the report, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting huddle");

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    if cli.no_color || !config.output.color {
        ConsoleFormatter::disable_color();
    }

    // === Dependency Injection ===
    let catalog = Arc::new(config.to_catalog()?);
    let classifier = Arc::new(config.to_classifier()?);
    let generator = Arc::new(config.to_generator()?);

    let mut use_case = RunMeetingUseCase::new(catalog, classifier, generator);
    if let Some(path) = &cli.log_file {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Logging meeting to {}", logger.path().display());
                use_case = use_case.with_logger(Arc::new(logger));
            }
            None => warn!("Meeting log disabled"),
        }
    }

    // Build input: command line wins over configuration
    let mut params = config.to_meeting_params()?;
    if let Some(max_turns) = cli.max_turns {
        params = params.with_max_turns(max_turns);
    }
    if cli.no_early_stop {
        params = params.without_early_stop();
    }
    let roster = if cli.participants.is_empty() {
        config.meeting.roster.clone()
    } else {
        cli.participants.clone()
    };
    let input = RunMeetingInput::new(cli.topic_text())
        .with_roster(roster)
        .with_params(params);

    let seed = cli
        .seed
        .or(config.meeting.seed)
        .unwrap_or_else(rand::random::<u64>);
    info!("Meeting seed: {} (pass --seed {} to replay)", seed, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let format: ReportFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let progress = LiveProgress::choose(format, cli.quiet, cli.bar).reporter();

    let result = use_case.execute_with_progress(input, &mut rng, progress.as_ref())?;

    println!("{}", ConsoleFormatter.format_as(&result, format));

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()?
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    Ok(config)
}
