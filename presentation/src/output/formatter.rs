//! Output formatter trait

use huddle_application::MeetingResult;
use huddle_domain::OutputFormat;

/// Trait for formatting meeting results
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, result: &MeetingResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &MeetingResult) -> String;

    /// Format the transcript only
    fn format_transcript(&self, result: &MeetingResult) -> String;

    /// Format the analytics only
    fn format_analytics(&self, result: &MeetingResult) -> String;

    /// Dispatch on a configured format
    fn format_as(&self, result: &MeetingResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Transcript => self.format_transcript(result),
            OutputFormat::Analytics => self.format_analytics(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
