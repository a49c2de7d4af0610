//! Conversation log port
//!
//! Every meeting emits three kinds of [`ConversationEvent`]: one when it
//! starts, one per played turn, and one when it ends. A [`ConversationLogger`]
//! adapter decides where they go; diagnostics stay on `tracing`.

use huddle_domain::{SessionEnd, Topic, TurnRecord};
use serde_json::{Value, json};

/// Which point of the meeting an event marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingEventKind {
    Started,
    Turn,
    Ended,
}

impl MeetingEventKind {
    /// Label written to the `type` field of a log line
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingEventKind::Started => "meeting_started",
            MeetingEventKind::Turn => "turn",
            MeetingEventKind::Ended => "meeting_ended",
        }
    }
}

/// One meeting event with its JSON payload. Adapters stamp the time.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub kind: MeetingEventKind,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: MeetingEventKind, payload: Value) -> Self {
        Self { kind, payload }
    }

    pub fn meeting_started(topic_text: &str, topic: Topic, roster: &[String], max_turns: usize) -> Self {
        Self::new(
            MeetingEventKind::Started,
            json!({
                "topic_text": topic_text,
                "topic": topic,
                "roster": roster,
                "max_turns": max_turns,
            }),
        )
    }

    /// The full record of a played turn, snapshot included
    pub fn turn(record: &TurnRecord) -> Self {
        Self::new(
            MeetingEventKind::Turn,
            json!({
                "turn": record.turn,
                "speaker": record.speaker,
                "message": record.message,
                "topic": record.topic,
                "response_kind": record.response_kind,
                "snapshot": record.snapshot,
            }),
        )
    }

    pub fn meeting_ended(end: &SessionEnd, records: usize) -> Self {
        Self::new(
            MeetingEventKind::Ended,
            json!({
                "end": end,
                "records": records,
            }),
        )
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Sink for meeting events.
///
/// `log` cannot fail: a broken log file must not stop a meeting.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
