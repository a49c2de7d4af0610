//! CLI command definitions

use clap::{Parser, ValueEnum};
use huddle_domain::OutputFormat as ReportFormat;
use std::path::PathBuf;

/// Topic used when none is given on the command line
pub const DEFAULT_TOPIC: &str = "General office discussion";

/// Output format for meeting reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Attendees, opening odds, transcript and analytics
    Full,
    /// Only the transcript
    Transcript,
    /// Only the analytics
    Analytics,
    /// The whole result as JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => ReportFormat::Full,
            OutputFormat::Transcript => ReportFormat::Transcript,
            OutputFormat::Analytics => ReportFormat::Analytics,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// CLI arguments for huddle
#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(author, version, about = "Simulated office meetings driven by engagement radii")]
#[command(long_about = r#"
Huddle simulates a meeting. Every participant has an engagement radius that
depends on the topic and on who else is in the room; each turn the next
speaker is drawn from those radii weighted by dominance, and what they say
moves the topic along.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./huddle.toml       Project-level config
3. ~/.config/huddle/config.toml   Global config
4. The built-in cast

Example:
  huddle "Quarterly sales meeting"
  huddle -n 8 -p Michael -p Toby "HR complaint about the party"
  huddle --seed 42 -o json "Beet harvest" > meeting.json
"#)]
pub struct Cli {
    /// Text that opens the meeting
    pub topic: Option<String>,

    /// Turns to play after the opening
    #[arg(short = 'n', long, value_name = "TURNS")]
    pub max_turns: Option<usize>,

    /// Participants to seat (can be specified multiple times; default: everyone)
    #[arg(short, long = "participant", value_name = "NAME")]
    pub participants: Vec<String>,

    /// Seed for a reproducible meeting
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Ignore the configured early-stop rule
    #[arg(long)]
    pub no_early_stop: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Draw a progress bar while the meeting runs
    #[arg(long)]
    pub bar: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress live progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL log of the meeting to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Opening text, falling back to [`DEFAULT_TOPIC`]
    pub fn topic_text(&self) -> &str {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .unwrap_or(DEFAULT_TOPIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_meeting_options() {
        let cli = Cli::parse_from([
            "huddle", "-n", "8", "-p", "Michael", "-p", "Toby", "--seed", "42", "-o",
            "analytics", "-vv", "Beet harvest",
        ]);
        assert_eq!(cli.topic_text(), "Beet harvest");
        assert_eq!(cli.max_turns, Some(8));
        assert_eq!(cli.participants, vec!["Michael", "Toby"]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.output, Some(OutputFormat::Analytics));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_missing_topic_uses_default() {
        let cli = Cli::parse_from(["huddle"]);
        assert_eq!(cli.topic_text(), DEFAULT_TOPIC);
        assert!(cli.output.is_none());
        assert!(cli.participants.is_empty());
    }

    #[test]
    fn test_output_format_maps_to_report_format() {
        assert_eq!(ReportFormat::from(OutputFormat::Json), ReportFormat::Json);
        assert_eq!(
            ReportFormat::from(OutputFormat::Transcript),
            ReportFormat::Transcript
        );
    }
}
