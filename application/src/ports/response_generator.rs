//! Response generator port
//!
//! Defines how the turn loop asks a collaborator for the words a participant
//! says. The loop never inspects the text beyond classifying its topic.

use huddle_domain::{ParticipantProfile, ResponseMemory, Topic, TurnRecord};
use rand::RngCore;
use thiserror::Error;

/// Errors a response generator may report
///
/// None of these abort a meeting; the turn loop writes a fallback record
/// instead.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("No lines available for {0}")]
    NoLines(String),

    #[error("Generation failed: {0}")]
    Other(String),
}

/// Everything a generator gets to know about the turn it is filling
#[derive(Debug, Clone, Copy)]
pub struct ResponseRequest<'a> {
    /// Who is speaking
    pub participant: &'a ParticipantProfile,
    /// Text that opened the meeting
    pub seed_text: &'a str,
    /// Topic of the conversation going into this turn
    pub topic: Topic,
    /// Trailing transcript records, oldest first
    pub recent: &'a [TurnRecord],
}

/// One generated utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    /// Ask the turn loop to end the meeting after this turn
    pub ends_session: bool,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: false,
        }
    }

    /// An utterance after which the meeting is over
    pub fn ending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: true,
        }
    }
}

/// Produces participant responses.
///
/// `memory` belongs to the current meeting only; generators that avoid
/// repeating themselves must keep that state there rather than in `self`.
/// `rng` is the meeting's randomness source, so a seeded meeting is
/// reproducible end to end.
pub trait ResponseGenerator: Send + Sync {
    fn generate(
        &self,
        request: &ResponseRequest<'_>,
        memory: &mut ResponseMemory,
        rng: &mut dyn RngCore,
    ) -> Result<Utterance, GenerationError>;
}
