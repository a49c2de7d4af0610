//! Live progress while a meeting runs

pub mod reporter;

use huddle_application::ports::progress::{MeetingProgress, NoProgress};
use huddle_domain::OutputFormat;
use reporter::{ProgressReporter, SimpleProgress};

/// What the terminal shows while turns are being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveProgress {
    Silent,
    Bar,
    Turns,
}

impl LiveProgress {
    /// Pick the live display for a run.
    ///
    /// Turns are streamed only when the final report leaves them out, so
    /// nothing is printed twice. Machine-readable formats stay silent.
    pub fn choose(format: OutputFormat, quiet: bool, bar: bool) -> Self {
        if quiet {
            LiveProgress::Silent
        } else if bar {
            LiveProgress::Bar
        } else {
            match format {
                OutputFormat::Analytics => LiveProgress::Turns,
                OutputFormat::Full | OutputFormat::Transcript | OutputFormat::Json => {
                    LiveProgress::Silent
                }
            }
        }
    }

    pub fn reporter(self) -> Box<dyn MeetingProgress> {
        match self {
            LiveProgress::Silent => Box::new(NoProgress),
            LiveProgress::Bar => Box::new(ProgressReporter::new()),
            LiveProgress::Turns => Box::new(SimpleProgress),
        }
    }
}
