//! Participant configuration from TOML (`[participants.<name>]` tables)
//!
//! Topic keys stay strings here so that a misspelt label can be reported
//! with the table it came from.

use super::ConfigValidationError;
use huddle_domain::{ParticipantProfile, SuppressionRule, Topic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw participant table from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileParticipantConfig {
    /// Engagement before topic and suppression adjustments
    pub baseline: f64,
    /// How strongly the participant takes the floor
    pub dominance: f64,
    /// Topic label -> multiplier
    #[serde(default)]
    pub topics: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppression: Option<FileSuppressionConfig>,
    /// Topic label -> scripted lines
    #[serde(default)]
    pub lines: BTreeMap<String, Vec<String>>,
}

/// Raw suppression rule (`[participants.<name>.suppression]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSuppressionConfig {
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    #[serde(default)]
    pub exempt: Vec<String>,
}

impl FileParticipantConfig {
    /// Build the domain profile, checking every topic label
    pub fn to_profile(&self, name: &str) -> Result<ParticipantProfile, ConfigValidationError> {
        let mut profile = ParticipantProfile::new(name, self.baseline, self.dominance);

        for (label, multiplier) in &self.topics {
            let topic = parse_topic(label, || format!("participants.{}.topics", name))?;
            profile = profile.with_multiplier(topic, *multiplier);
        }

        if let Some(suppression) = &self.suppression {
            let mut rule = SuppressionRule::new(&suppression.target);
            if let Some(factor) = suppression.factor {
                rule = rule.with_factor(factor);
            }
            for label in &suppression.exempt {
                let topic = parse_topic(label, || format!("participants.{}.suppression.exempt", name))?;
                rule = rule.exempt_on(topic);
            }
            profile = profile.with_suppression(rule);
        }

        profile.validate()?;
        Ok(profile)
    }

    /// Scripted lines keyed by parsed topic
    pub fn to_lines(&self, name: &str) -> Result<BTreeMap<Topic, Vec<String>>, ConfigValidationError> {
        let mut lines = BTreeMap::new();
        for (label, pool) in &self.lines {
            let topic = parse_topic(label, || format!("participants.{}.lines", name))?;
            lines.insert(topic, pool.clone());
        }
        Ok(lines)
    }
}

fn parse_topic(
    label: &str,
    field: impl FnOnce() -> String,
) -> Result<Topic, ConfigValidationError> {
    label
        .parse::<Topic>()
        .map_err(|source| ConfigValidationError::Topic {
            field: field(),
            source,
        })
}
