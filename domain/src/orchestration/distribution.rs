//! Speaker distribution - engagement radii normalized into probabilities

use crate::core::topic::Topic;
use crate::engagement::{self, EngagementContext};
use crate::participant::profile::ParticipantProfile;
use crate::participant::roster::Roster;
use serde::{Deserialize, Serialize};

/// Score of one participant for one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerScore {
    pub name: String,
    /// Engagement radius, in `[0, RADIUS_CAP]`
    pub radius: f64,
    /// `radius × dominance`, before normalization
    pub influence: f64,
    /// Normalized share of the total influence
    pub probability: f64,
}

/// Per-participant scores for one topic.
///
/// When the total influence is zero the probabilities are left at zero;
/// [`uniform_if_degenerate`](Self::uniform_if_degenerate) applies the
/// fallback the selector uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeakerDistribution {
    scores: Vec<SpeakerScore>,
}

impl SpeakerDistribution {
    /// Score every profile in `members`, in iteration order.
    pub fn over<'a>(
        members: impl IntoIterator<Item = &'a ParticipantProfile>,
        topic: Topic,
        context: &EngagementContext,
    ) -> Self {
        let mut scores: Vec<SpeakerScore> = members
            .into_iter()
            .map(|profile| {
                let radius = engagement::radius(profile, topic, context);
                SpeakerScore {
                    name: profile.name().to_string(),
                    radius,
                    influence: radius * profile.dominance(),
                    probability: 0.0,
                }
            })
            .collect();

        let total: f64 = scores.iter().map(|s| s.influence).sum();
        if total > 0.0 {
            for score in &mut scores {
                score.probability = score.influence / total;
            }
        }

        Self { scores }
    }

    pub fn total_influence(&self) -> f64 {
        self.scores.iter().map(|s| s.influence).sum()
    }

    /// True when nobody has any influence and the probabilities are all zero
    pub fn is_degenerate(&self) -> bool {
        !self.scores.is_empty() && self.total_influence() <= 0.0
    }

    /// Replace a degenerate distribution with a uniform one.
    pub fn uniform_if_degenerate(mut self) -> Self {
        if self.is_degenerate() {
            let share = 1.0 / self.scores.len() as f64;
            for score in &mut self.scores {
                score.probability = share;
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&SpeakerScore> {
        self.scores.iter().find(|s| s.name == name)
    }

    pub fn probability(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.probability)
    }

    pub fn scores(&self) -> &[SpeakerScore] {
        &self.scores
    }

    /// Scores sorted by probability, highest first
    pub fn ranked(&self) -> Vec<&SpeakerScore> {
        let mut ranked: Vec<_> = self.scores.iter().collect();
        ranked.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Normalized speaking probabilities for every roster member.
///
/// Always sums to 1: when every influence is zero each member gets an equal
/// share. Use [`SpeakerDistribution::over`] for the raw zeros.
pub fn probabilities(roster: &Roster, topic: Topic, context: &EngagementContext) -> SpeakerDistribution {
    SpeakerDistribution::over(roster.iter(), topic, context).uniform_if_degenerate()
}
