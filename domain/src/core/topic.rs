//! Topic value object - the closed set of conversation labels

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Topic label produced by a topic classifier (Value Object)
///
/// Multiplier lookups and suppression exemptions are keyed by this type, so a
/// typo in configuration fails at load time instead of silently matching
/// nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Management,
    Hr,
    Survival,
    Conspiracy,
    Confusion,
    Beets,
    Sales,
    #[default]
    General,
}

impl Topic {
    /// Every topic, in declaration order
    pub const ALL: [Topic; 8] = [
        Topic::Management,
        Topic::Hr,
        Topic::Survival,
        Topic::Conspiracy,
        Topic::Confusion,
        Topic::Beets,
        Topic::Sales,
        Topic::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Management => "management",
            Topic::Hr => "hr",
            Topic::Survival => "survival",
            Topic::Conspiracy => "conspiracy",
            Topic::Confusion => "confusion",
            Topic::Beets => "beets",
            Topic::Sales => "sales",
            Topic::General => "general",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == label)
            .ok_or_else(|| DomainError::UnknownTopic(s.to_string()))
    }
}
