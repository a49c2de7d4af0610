//! Turn record - one immutable entry of a meeting transcript

use crate::core::topic::Topic;
use crate::orchestration::distribution::SpeakerDistribution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Speaker name used for the seed entry at turn 0
pub const MODERATOR: &str = "Moderator";

/// How the message of a turn came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// The text that opened the meeting
    Seed,
    /// Produced by the response generator
    Generated,
    /// Placeholder written after the generator failed
    Fallback,
}

/// Radius and probability of one participant at one turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub radius: f64,
    pub probability: f64,
}

/// One step of the meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub speaker: String,
    pub message: String,
    pub topic: Topic,
    pub response_kind: ResponseKind,
    /// Every roster member's score for `topic` at this turn
    pub snapshot: BTreeMap<String, ScoreSnapshot>,
}

impl TurnRecord {
    /// Creates the turn-0 entry for the text that opened the meeting.
    pub fn seed(message: impl Into<String>, topic: Topic, scores: &SpeakerDistribution) -> Self {
        Self::new(0, MODERATOR, message, topic, ResponseKind::Seed, scores)
    }

    /// Creates a turn entry.
    ///
    /// # Arguments
    /// * `turn` - Index in the transcript (0 is the seed)
    /// * `speaker` - Participant who spoke
    /// * `message` - What they said; opaque to the orchestrator
    /// * `topic` - Topic classified from `message`
    /// * `kind` - Whether the message was generated or a fallback
    /// * `scores` - Distribution over the whole roster for `topic`
    pub fn new(
        turn: usize,
        speaker: impl Into<String>,
        message: impl Into<String>,
        topic: Topic,
        kind: ResponseKind,
        scores: &SpeakerDistribution,
    ) -> Self {
        let snapshot = scores
            .scores()
            .iter()
            .map(|s| {
                (
                    s.name.clone(),
                    ScoreSnapshot {
                        radius: s.radius,
                        probability: s.probability,
                    },
                )
            })
            .collect();

        Self {
            turn,
            speaker: speaker.into(),
            message: message.into(),
            topic,
            response_kind: kind,
            snapshot,
        }
    }

    pub fn is_seed(&self) -> bool {
        self.response_kind == ResponseKind::Seed
    }

    pub fn is_fallback(&self) -> bool {
        self.response_kind == ResponseKind::Fallback
    }

    pub fn score(&self, name: &str) -> Option<&ScoreSnapshot> {
        self.snapshot.get(name)
    }
}
