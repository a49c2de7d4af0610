//! Progress notification port
//!
//! Defines the interface for reporting progress while a meeting runs.

use huddle_domain::{SessionEnd, TurnRecord};

/// Callback for progress updates during a meeting
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (live transcript, progress bar, etc.)
pub trait MeetingProgress: Send + Sync {
    /// Called once with the seed record, before the first turn
    fn on_meeting_start(&self, seed: &TurnRecord, max_turns: usize);

    /// Called after each turn is recorded
    fn on_turn(&self, record: &TurnRecord);

    /// Called when the meeting reaches its terminal state
    fn on_meeting_end(&self, end: &SessionEnd);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl MeetingProgress for NoProgress {
    fn on_meeting_start(&self, _seed: &TurnRecord, _max_turns: usize) {}
    fn on_turn(&self, _record: &TurnRecord) {}
    fn on_meeting_end(&self, _end: &SessionEnd) {}
}
