//! Participant profile - the static engagement traits of one participant

use crate::core::error::DomainError;
use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Factor applied by a suppression rule when the config does not give one.
pub const DEFAULT_SUPPRESSION_FACTOR: f64 = 0.1;

/// Lowers a participant's engagement while `target` is in the room.
///
/// The rule is lifted on `exempt` topics, which is how a participant who is
/// normally talked over still gets to lead on their own subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppressionRule {
    pub target: String,
    pub factor: f64,
    #[serde(default)]
    pub exempt: BTreeSet<Topic>,
}

impl SuppressionRule {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            factor: DEFAULT_SUPPRESSION_FACTOR,
            exempt: BTreeSet::new(),
        }
    }

    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn exempt_on(mut self, topic: Topic) -> Self {
        self.exempt.insert(topic);
        self
    }

    /// Whether the rule dampens engagement on `topic`
    pub fn applies_to(&self, topic: Topic) -> bool {
        !self.exempt.contains(&topic)
    }
}

/// Static engagement profile of a participant (Entity)
///
/// Profiles are built once from configuration and never mutated; the
/// orchestrator only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    name: String,
    baseline: f64,
    #[serde(default)]
    topic_multipliers: BTreeMap<Topic, f64>,
    dominance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suppression: Option<SuppressionRule>,
}

impl ParticipantProfile {
    /// Creates a profile with no topic affinities and no suppression rule.
    ///
    /// # Arguments
    /// * `name` - Unique participant name within a catalog
    /// * `baseline` - Engagement before topic and situational modifiers
    /// * `dominance` - Influence weight, also decides back-to-back eligibility
    pub fn new(name: impl Into<String>, baseline: f64, dominance: f64) -> Self {
        Self {
            name: name.into(),
            baseline,
            topic_multipliers: BTreeMap::new(),
            dominance,
            suppression: None,
        }
    }

    pub fn with_multiplier(mut self, topic: Topic, multiplier: f64) -> Self {
        self.topic_multipliers.insert(topic, multiplier);
        self
    }

    pub fn with_suppression(mut self, rule: SuppressionRule) -> Self {
        self.suppression = Some(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn dominance(&self) -> f64 {
        self.dominance
    }

    pub fn suppression(&self) -> Option<&SuppressionRule> {
        self.suppression.as_ref()
    }

    pub fn topic_multipliers(&self) -> &BTreeMap<Topic, f64> {
        &self.topic_multipliers
    }

    /// Multiplier for `topic`, 1.0 when the profile does not list it
    pub fn multiplier(&self, topic: Topic) -> f64 {
        self.topic_multipliers.get(&topic).copied().unwrap_or(1.0)
    }

    /// Validate the profile in isolation.
    ///
    /// Cross-profile checks (suppression targets) live in
    /// [`ProfileCatalog`](super::catalog::ProfileCatalog).
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.as_str();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_profile(name, "name cannot be empty"));
        }
        if !self.baseline.is_finite() || self.baseline < 0.0 {
            return Err(DomainError::invalid_profile(
                name,
                format!("baseline must be a non-negative number, got {}", self.baseline),
            ));
        }
        if !(0.0..=1.0).contains(&self.dominance) {
            return Err(DomainError::invalid_profile(
                name,
                format!("dominance must be within [0, 1], got {}", self.dominance),
            ));
        }
        for (topic, multiplier) in &self.topic_multipliers {
            if !multiplier.is_finite() || *multiplier < 0.0 {
                return Err(DomainError::invalid_profile(
                    name,
                    format!("multiplier for {} must be non-negative, got {}", topic, multiplier),
                ));
            }
        }
        if let Some(rule) = &self.suppression {
            if rule.target == self.name {
                return Err(DomainError::invalid_profile(
                    name,
                    "a participant cannot suppress itself",
                ));
            }
            if !(0.0..=1.0).contains(&rule.factor) {
                return Err(DomainError::invalid_profile(
                    name,
                    format!("suppression factor must be within [0, 1], got {}", rule.factor),
                ));
            }
        }
        Ok(())
    }
}
