//! Progress reporting while a meeting runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use huddle_application::ports::progress::MeetingProgress;
use huddle_domain::{SessionEnd, TurnRecord};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports meeting progress with a progress bar
///
/// The bar shows the turn count and the latest speaker; the transcript
/// itself is left to the final report.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn turn_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MeetingProgress for ProgressReporter {
    fn on_meeting_start(&self, seed: &TurnRecord, max_turns: usize) {
        let bar = ProgressBar::new(max_turns as u64);
        bar.set_style(Self::turn_style());
        bar.set_prefix("Meeting");
        bar.set_message(format!("on {}", seed.topic));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn on_turn(&self, record: &TurnRecord) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            let status = if record.is_fallback() {
                format!("{} {} ({})", "x".red(), record.speaker, record.topic)
            } else {
                format!("{} {} ({})", "v".green(), record.speaker, record.topic)
            };
            bar.set_message(status);
            bar.inc(1);
        }
    }

    fn on_meeting_end(&self, end: &SessionEnd) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            if end.is_early_stop() {
                bar.abandon_with_message(format!("{}", "stopped early".yellow()));
            } else {
                bar.finish_with_message(format!("{}", "adjourned".green()));
            }
        }
    }
}

/// Simple text-based progress: prints every turn as it happens
pub struct SimpleProgress;

impl MeetingProgress for SimpleProgress {
    fn on_meeting_start(&self, seed: &TurnRecord, max_turns: usize) {
        println!(
            "{} {} ({} turns, {})",
            "->".cyan(),
            "Meeting started".bold(),
            max_turns,
            seed.topic
        );
        println!("  {}", ConsoleFormatter::format_turn(seed));
    }

    fn on_turn(&self, record: &TurnRecord) {
        println!("  {}", ConsoleFormatter::format_turn(record));
    }

    fn on_meeting_end(&self, end: &SessionEnd) {
        println!("{}", ConsoleFormatter::format_end(end));
        println!();
    }
}
