//! Meeting analytics - a pure reduction over the transcript

use super::Transcript;
use crate::core::topic::Topic;
use crate::participant::roster::Roster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Turns within this distance count as an interaction between two rivals.
pub const RIVALRY_WINDOW: usize = 2;

/// How much one participant spoke and how engaged they were on average
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeakerStats {
    pub turns: usize,
    /// Share of non-seed turns, 0-100
    pub percentage: f64,
    pub avg_radius: f64,
    pub avg_probability: f64,
}

/// Back-and-forth between a suppression target and the participant it dampens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rivalry {
    /// Participant whose presence dampens the other
    pub suppressor: String,
    /// Participant carrying the suppression rule
    pub suppressed: String,
    /// Pairs of their turns at most [`RIVALRY_WINDOW`] apart
    pub interactions: usize,
}

/// Summary of a finished meeting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeetingAnalytics {
    /// Turns after the seed
    pub total_turns: usize,
    pub speaker_distribution: BTreeMap<String, SpeakerStats>,
    pub topic_evolution: Vec<Topic>,
    pub fallback_turns: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rivalries: Vec<Rivalry>,
}

impl MeetingAnalytics {
    /// Reduce a transcript into per-speaker and per-topic statistics.
    ///
    /// Averages run over every record, the seed included, since each one
    /// carries a full snapshot.
    pub fn from_transcript(transcript: &Transcript, roster: &Roster) -> Self {
        let records = transcript.records();
        let total_turns = records.len().saturating_sub(1);
        let record_count = records.len().max(1) as f64;

        let speaker_distribution = roster
            .iter()
            .map(|profile| {
                let name = profile.name();
                let turns = records.iter().filter(|r| r.speaker == name).count();
                let (radius_sum, probability_sum) = records
                    .iter()
                    .filter_map(|r| r.score(name))
                    .fold((0.0, 0.0), |(r, p), s| (r + s.radius, p + s.probability));

                let stats = SpeakerStats {
                    turns,
                    percentage: turns as f64 / total_turns.max(1) as f64 * 100.0,
                    avg_radius: radius_sum / record_count,
                    avg_probability: probability_sum / record_count,
                };
                (name.to_string(), stats)
            })
            .collect();

        let rivalries = roster
            .iter()
            .filter_map(|profile| {
                let rule = profile.suppression()?;
                roster.contains(&rule.target).then(|| Rivalry {
                    suppressor: rule.target.clone(),
                    suppressed: profile.name().to_string(),
                    interactions: count_interactions(transcript, &rule.target, profile.name()),
                })
            })
            .collect();

        Self {
            total_turns,
            speaker_distribution,
            topic_evolution: records.iter().map(|r| r.topic).collect(),
            fallback_turns: records.iter().filter(|r| r.is_fallback()).count(),
            rivalries,
        }
    }

    pub fn stats(&self, name: &str) -> Option<&SpeakerStats> {
        self.speaker_distribution.get(name)
    }

    /// Speakers sorted by number of turns, most talkative first
    pub fn by_turns(&self) -> Vec<(&str, &SpeakerStats)> {
        let mut ranked: Vec<_> = self
            .speaker_distribution
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        ranked.sort_by(|a, b| b.1.turns.cmp(&a.1.turns).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

fn count_interactions(transcript: &Transcript, first: &str, second: &str) -> usize {
    let positions = |name: &str| -> Vec<usize> {
        transcript
            .iter()
            .enumerate()
            .filter(|(_, r)| r.speaker == name)
            .map(|(i, _)| i)
            .collect()
    };
    let first_turns = positions(first);
    let second_turns = positions(second);

    first_turns
        .iter()
        .map(|a| {
            second_turns
                .iter()
                .filter(|b| a.abs_diff(**b) <= RIVALRY_WINDOW)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engagement::EngagementContext;
    use crate::orchestration::distribution::probabilities;
    use crate::participant::catalog::ProfileCatalog;
    use crate::participant::profile::{ParticipantProfile, SuppressionRule};
    use crate::transcript::record::{ResponseKind, TurnRecord};

    fn roster() -> Roster {
        ProfileCatalog::from_profiles([
            ParticipantProfile::new("Michael", 0.8, 0.9),
            ParticipantProfile::new("Dwight", 0.6, 0.7),
            ParticipantProfile::new("Toby", 0.15, 0.3)
                .with_suppression(SuppressionRule::new("Michael").exempt_on(Topic::Hr)),
        ])
        .unwrap()
        .full_roster()
        .unwrap()
    }

    fn transcript(roster: &Roster, speakers: &[(&str, ResponseKind)]) -> Transcript {
        let ctx = EngagementContext::from_roster(roster);
        let scores = probabilities(roster, Topic::General, &ctx);
        let mut transcript = Transcript::new();
        transcript.push(TurnRecord::seed("Let's begin", Topic::Management, &scores));
        for (i, (speaker, kind)) in speakers.iter().enumerate() {
            transcript.push(TurnRecord::new(i + 1, *speaker, "...", Topic::General, *kind, &scores));
        }
        transcript
    }

    #[test]
    fn test_turn_counts_and_percentages() {
        let roster = roster();
        let t = transcript(
            &roster,
            &[
                ("Michael", ResponseKind::Generated),
                ("Michael", ResponseKind::Generated),
                ("Dwight", ResponseKind::Generated),
                ("Toby", ResponseKind::Fallback),
            ],
        );
        let analytics = MeetingAnalytics::from_transcript(&t, &roster);

        assert_eq!(analytics.total_turns, 4);
        assert_eq!(analytics.stats("Michael").unwrap().turns, 2);
        assert!((analytics.stats("Michael").unwrap().percentage - 50.0).abs() < 1e-9);
        assert!((analytics.stats("Toby").unwrap().percentage - 25.0).abs() < 1e-9);
        assert_eq!(analytics.fallback_turns, 1);
        assert_eq!(analytics.by_turns()[0].0, "Michael");
    }

    #[test]
    fn test_topic_evolution_includes_seed() {
        let roster = roster();
        let t = transcript(&roster, &[("Dwight", ResponseKind::Generated)]);
        let analytics = MeetingAnalytics::from_transcript(&t, &roster);
        assert_eq!(analytics.topic_evolution, vec![Topic::Management, Topic::General]);
    }

    #[test]
    fn test_averages_match_constant_snapshots() {
        let roster = roster();
        let t = transcript(&roster, &[("Dwight", ResponseKind::Generated)]);
        let analytics = MeetingAnalytics::from_transcript(&t, &roster);

        let expected = t.records()[0].score("Dwight").unwrap();
        let stats = analytics.stats("Dwight").unwrap();
        assert!((stats.avg_radius - expected.radius).abs() < 1e-12);
        assert!((stats.avg_probability - expected.probability).abs() < 1e-12);
    }

    #[test]
    fn test_rivalry_counts_nearby_turns() {
        let roster = roster();
        // indices: 1 Michael, 2 Toby, 3 Dwight, 4 Dwight, 5 Dwight, 6 Toby
        let t = transcript(
            &roster,
            &[
                ("Michael", ResponseKind::Generated),
                ("Toby", ResponseKind::Generated),
                ("Dwight", ResponseKind::Generated),
                ("Dwight", ResponseKind::Generated),
                ("Dwight", ResponseKind::Generated),
                ("Toby", ResponseKind::Generated),
            ],
        );
        let analytics = MeetingAnalytics::from_transcript(&t, &roster);
        assert_eq!(
            analytics.rivalries,
            vec![Rivalry {
                suppressor: "Michael".to_string(),
                suppressed: "Toby".to_string(),
                interactions: 1,
            }]
        );
    }

    #[test]
    fn test_seed_only_transcript() {
        let roster = roster();
        let t = transcript(&roster, &[]);
        let analytics = MeetingAnalytics::from_transcript(&t, &roster);
        assert_eq!(analytics.total_turns, 0);
        assert!(analytics.speaker_distribution.values().all(|s| s.turns == 0));
        assert!(analytics.speaker_distribution.values().all(|s| s.percentage == 0.0));
    }
}
