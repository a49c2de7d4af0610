//! Console output formatter for meeting results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use huddle_application::MeetingResult;
use huddle_domain::{MeetingAnalytics, ResponseKind, SessionEnd, TurnRecord};

/// Formats meeting results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete meeting report
    pub fn format(result: &MeetingResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Meeting Transcript"));
        output.push('\n');

        let opening = result.transcript.records().first();
        let topic = opening.map(|seed| seed.topic.to_string()).unwrap_or_default();
        output.push_str(&format!(
            "{} {} {}\n",
            "Topic:".cyan().bold(),
            result.topic_text,
            format!("({})", topic).dimmed()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Attendees:".cyan().bold(),
            result.roster.join(", ")
        ));

        if let Some(seed) = opening {
            output.push_str(&Self::section_header("Opening Odds"));
            output.push_str(&Self::opening_odds(seed));
        }

        output.push_str(&Self::section_header("Transcript"));
        output.push_str(&Self::transcript_lines(result));
        output.push_str(&format!("\n{}\n", Self::format_end(&result.end)));

        output.push_str(&Self::section_header("Analytics"));
        output.push_str(&Self::analytics_lines(&result.analytics));

        output.push_str(&Self::footer());

        output
    }

    /// Turn colored output off for the rest of the process
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format as JSON
    pub fn format_json(result: &MeetingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the transcript and how the meeting ended
    pub fn format_transcript(result: &MeetingResult) -> String {
        let mut output = Self::transcript_lines(result);
        output.push_str(&format!("{}\n", Self::format_end(&result.end)));
        output
    }

    /// Format analytics only (concise output)
    pub fn format_analytics(result: &MeetingResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Meeting Analytics ===".cyan().bold()
        ));
        output.push_str(&format!("{} {}\n", "Topic:".bold(), result.topic_text));
        output.push_str(&format!(
            "{} {}\n\n",
            "Ended:".bold(),
            Self::format_end(&result.end)
        ));
        output.push_str(&Self::analytics_lines(&result.analytics));

        output
    }

    /// One transcript line: `[Name] (p%, r=radius): message`
    ///
    /// The seed entry has no scores of its own and prints as `[Moderator] text`.
    pub fn format_turn(record: &TurnRecord) -> String {
        let speaker = format!("[{}]", record.speaker);
        match record.response_kind {
            ResponseKind::Seed => format!("{} {}", speaker.bold(), record.message),
            kind => {
                let scores = record
                    .score(&record.speaker)
                    .map(|s| format!("({:.1}%, r={:.2})", s.probability * 100.0, s.radius))
                    .unwrap_or_default();
                let line = format!(
                    "{} {}: {}",
                    speaker.yellow().bold(),
                    scores.dimmed(),
                    record.message
                );
                if kind == ResponseKind::Fallback {
                    format!("{} {}", line, "(fallback)".red())
                } else {
                    line
                }
            }
        }
    }

    /// Human-readable end reason
    pub fn format_end(end: &SessionEnd) -> String {
        let label = "Meeting ended:".cyan().bold();
        if end.is_early_stop() {
            format!("{} {}", label, end.to_string().yellow())
        } else {
            format!("{} {}", label, end)
        }
    }

    fn opening_odds(seed: &TurnRecord) -> String {
        let mut ranked: Vec<_> = seed.snapshot.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.probability
                .total_cmp(&a.1.probability)
                .then_with(|| a.0.cmp(b.0))
        });

        ranked
            .into_iter()
            .map(|(name, score)| {
                format!(
                    "  {:<12} {:>5.1}%  radius {:.2}\n",
                    name,
                    score.probability * 100.0,
                    score.radius
                )
            })
            .collect()
    }

    fn transcript_lines(result: &MeetingResult) -> String {
        result
            .transcript
            .iter()
            .map(|record| format!("{}\n", Self::format_turn(record)))
            .collect()
    }

    fn analytics_lines(analytics: &MeetingAnalytics) -> String {
        let mut output = format!("{} {}\n", "Total turns:".bold(), analytics.total_turns);

        for (name, stats) in analytics.by_turns() {
            output.push_str(&format!(
                "  {:<12} {:>3} turns ({:>5.1}%)  avg radius {:.2}  avg p {:.3}\n",
                name, stats.turns, stats.percentage, stats.avg_radius, stats.avg_probability
            ));
        }

        let topics: Vec<_> = analytics
            .topic_evolution
            .iter()
            .map(|topic| topic.as_str())
            .collect();
        output.push_str(&format!(
            "{} {}\n",
            "Topic evolution:".bold(),
            topics.join(" -> ")
        ));

        if analytics.fallback_turns > 0 {
            output.push_str(&format!(
                "{} {}\n",
                "Fallback turns:".red().bold(),
                analytics.fallback_turns
            ));
        }

        for rivalry in &analytics.rivalries {
            output.push_str(&format!(
                "{} {} vs {}: {} interactions\n",
                "Rivalry:".bold(),
                rivalry.suppressor,
                rivalry.suppressed,
                rivalry.interactions
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &MeetingResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &MeetingResult) -> String {
        Self::format_json(result)
    }

    fn format_transcript(&self, result: &MeetingResult) -> String {
        Self::format_transcript(result)
    }

    fn format_analytics(&self, result: &MeetingResult) -> String {
        Self::format_analytics(result)
    }
}
