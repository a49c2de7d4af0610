//! Back-to-back speaker rule

use crate::participant::profile::ParticipantProfile;
use std::collections::BTreeSet;

/// Dominance at or above which a participant may take two turns in a row.
pub const DOMINANCE_THRESHOLD: f64 = 0.8;

/// Whether `profile` may follow its own turn
pub fn may_speak_consecutively(profile: &ParticipantProfile) -> bool {
    profile.dominance() >= DOMINANCE_THRESHOLD
}

/// Exclusion set for the turn after `last_speaker`.
pub fn consecutive_exclusion(last_speaker: Option<&ParticipantProfile>) -> BTreeSet<String> {
    match last_speaker {
        Some(profile) if !may_speak_consecutively(profile) => {
            BTreeSet::from([profile.name().to_string()])
        }
        _ => BTreeSet::new(),
    }
}
