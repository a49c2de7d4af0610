//! Domain layer for huddle
//!
//! This crate contains the core turn-taking logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Engagement radius
//!
//! Every participant has a static [`ParticipantProfile`]. For a given
//! [`Topic`] and set of people in the room, [`radius`] turns that profile
//! into a capped score of how much the participant wants to speak.
//!
//! ## Turn selection
//!
//! Radii weighted by dominance are normalized into a [`SpeakerDistribution`]
//! and [`select_speaker`] draws the next speaker from it, honouring the
//! back-to-back rule from [`consecutive_exclusion`].
//!
//! ## Transcript
//!
//! Each step is recorded as an append-only [`TurnRecord`] carrying the full
//! score snapshot, and [`MeetingAnalytics`] summarizes a finished
//! [`Transcript`].

pub mod config;
pub mod core;
pub mod engagement;
pub mod orchestration;
pub mod participant;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, topic::Topic};
pub use engagement::{EngagementContext, RADIUS_CAP, radius};
pub use orchestration::{
    distribution::{SpeakerDistribution, SpeakerScore, probabilities},
    exclusion::{DOMINANCE_THRESHOLD, consecutive_exclusion, may_speak_consecutively},
    selection::select_speaker,
};
pub use participant::{
    catalog::ProfileCatalog,
    profile::{DEFAULT_SUPPRESSION_FACTOR, ParticipantProfile, SuppressionRule},
    roster::Roster,
};
pub use session::{
    end::{EarlyStopRule, SessionEnd, StopTrigger},
    memory::ResponseMemory,
};
pub use transcript::{
    Transcript,
    analytics::{MeetingAnalytics, Rivalry, SpeakerStats},
    record::{MODERATOR, ResponseKind, ScoreSnapshot, TurnRecord},
};
