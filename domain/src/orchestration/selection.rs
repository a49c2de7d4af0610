//! Next-speaker selection

use super::distribution::SpeakerDistribution;
use crate::core::error::DomainError;
use crate::core::topic::Topic;
use crate::engagement::EngagementContext;
use crate::participant::profile::ParticipantProfile;
use crate::participant::roster::Roster;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use std::collections::BTreeSet;

/// Draw the next speaker from `roster`, skipping anyone in `exclude`.
///
/// The draw is weighted by the normalized influence of the remaining
/// candidates, so repeated calls with the same inputs give different people.
/// Two situations fall back to a uniform draw:
///
/// - `exclude` covers the whole roster: the exclusion is ignored and anyone
///   may be picked, so the meeting always moves forward.
/// - every remaining candidate has zero influence on `topic`.
///
/// Returns an error only when `exclude` names someone who is not on the
/// roster.
pub fn select_speaker<'r, R: Rng + ?Sized>(
    roster: &'r Roster,
    topic: Topic,
    context: &EngagementContext,
    exclude: &BTreeSet<String>,
    rng: &mut R,
) -> Result<&'r ParticipantProfile, DomainError> {
    roster.ensure_members(exclude)?;

    let available = roster.without(exclude);
    if available.is_empty() {
        let everyone: Vec<_> = roster.iter().collect();
        return Ok(everyone[rng.gen_range(0..everyone.len())]);
    }

    let distribution =
        SpeakerDistribution::over(available.iter().copied(), topic, context).uniform_if_degenerate();
    let weights = distribution.scores().iter().map(|s| s.probability);

    let index = match WeightedIndex::new(weights) {
        Ok(weighted) => weighted.sample(rng),
        Err(_) => rng.gen_range(0..available.len()),
    };
    Ok(available[index])
}
