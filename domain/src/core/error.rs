//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a configuration problem: bad profile data or a roster that
/// names someone the catalog does not know. Conditions that arise while a
/// meeting is running are recovered in place and never reach this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Invalid profile for {name}: {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Unknown topic label: {0}")]
    UnknownTopic(String),

    #[error("{name} is suppressed by unknown participant {target}")]
    UnknownSuppressionTarget { name: String, target: String },
}

impl DomainError {
    pub(crate) fn invalid_profile(name: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidProfile {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by a name the catalog does not contain
    pub fn is_unknown_name(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownParticipant(_) | DomainError::UnknownSuppressionTarget { .. }
        )
    }
}
