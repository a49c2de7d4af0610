//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types once every layer has been merged.

mod classifier;
mod meeting;
mod output;
mod participants;

pub use classifier::{FileClassifierConfig, FileClassifierRule};
pub use meeting::{FileEarlyStopConfig, FileMeetingConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use participants::{FileParticipantConfig, FileSuppressionConfig};

use crate::classifier::KeywordTopicClassifier;
use crate::generator::ScriptedResponseGenerator;
use huddle_application::MeetingParams;
use huddle_domain::{DomainError, ProfileCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("{field}: {source}")]
    Topic { field: String, source: DomainError },

    #[error("{field} cannot be empty")]
    EmptyKeyword { field: String },

    #[error(transparent)]
    Profile(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Turn loop settings
    pub meeting: FileMeetingConfig,
    /// Participant name -> profile and lines
    pub participants: BTreeMap<String, FileParticipantConfig>,
    /// Topic keyword rules
    pub classifier: FileClassifierConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Build the profile catalog from every `[participants.*]` table
    pub fn to_catalog(&self) -> Result<ProfileCatalog, ConfigValidationError> {
        let mut catalog = ProfileCatalog::new();
        for (name, participant) in &self.participants {
            catalog.insert(participant.to_profile(name)?)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_meeting_params(&self) -> Result<MeetingParams, ConfigValidationError> {
        self.meeting.to_params()
    }

    pub fn to_classifier(&self) -> Result<KeywordTopicClassifier, ConfigValidationError> {
        self.classifier.to_classifier()
    }

    /// Collect every participant's lines into a scripted generator
    pub fn to_generator(&self) -> Result<ScriptedResponseGenerator, ConfigValidationError> {
        let mut generator = ScriptedResponseGenerator::new();
        for (name, participant) in &self.participants {
            for (topic, lines) in participant.to_lines(name)? {
                generator = generator.with_lines(name, topic, lines);
            }
        }
        Ok(generator)
    }

    /// Validate the entire configuration, stopping at the first problem.
    ///
    /// This runs every conversion once, plus the cross checks that need more
    /// than one section: the catalog must not be empty, and the seated roster
    /// and the early-stop participant must name known participants.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let catalog = self.to_catalog()?;
        let params = self.to_meeting_params()?;
        self.to_classifier()?;
        self.to_generator()?;

        if self.meeting.roster.is_empty() {
            catalog.full_roster()?;
        } else {
            catalog.roster(&self.meeting.roster)?;
        }
        if let Some(rule) = &params.early_stop {
            catalog.get(&rule.participant)?;
        }
        Ok(())
    }

    /// Render the merged configuration back to TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
