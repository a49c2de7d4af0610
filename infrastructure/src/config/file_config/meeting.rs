//! Meeting configuration from TOML (`[meeting]` section)

use super::ConfigValidationError;
use huddle_application::MeetingParams;
use huddle_domain::EarlyStopRule;
use serde::{Deserialize, Serialize};

/// Raw meeting configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMeetingConfig {
    /// Turns after the seed entry
    pub max_turns: usize,
    /// Records handed to the response generator as context
    pub recent_turns: usize,
    /// Fixed RNG seed for reproducible meetings
    pub seed: Option<u64>,
    /// Participants to seat; empty means the whole catalog
    pub roster: Vec<String>,
    /// Keyword rule that ends the meeting early
    pub early_stop: Option<FileEarlyStopConfig>,
}

impl Default for FileMeetingConfig {
    fn default() -> Self {
        let params = MeetingParams::default();
        Self {
            max_turns: params.max_turns,
            recent_turns: params.recent_turns,
            seed: None,
            roster: Vec::new(),
            early_stop: None,
        }
    }
}

/// Raw early-stop rule (`[meeting.early_stop]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEarlyStopConfig {
    /// Set to false to switch off a rule inherited from a lower layer
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub participant: String,
    pub keyword: String,
}

fn enabled_by_default() -> bool {
    true
}

impl FileMeetingConfig {
    /// Convert into turn loop parameters
    pub fn to_params(&self) -> Result<MeetingParams, ConfigValidationError> {
        let mut params = MeetingParams::default()
            .with_max_turns(self.max_turns)
            .with_recent_turns(self.recent_turns);

        if let Some(rule) = self.early_stop.as_ref().filter(|rule| rule.enabled) {
            if rule.keyword.trim().is_empty() {
                return Err(ConfigValidationError::EmptyKeyword {
                    field: "meeting.early_stop.keyword".to_string(),
                });
            }
            params = params.with_early_stop(EarlyStopRule::new(&rule.participant, &rule.keyword));
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> FileMeetingConfig {
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        config.meeting
    }

    #[test]
    fn test_defaults_match_meeting_params() {
        let params = FileMeetingConfig::default().to_params().unwrap();
        assert_eq!(params, MeetingParams::default());
    }

    #[test]
    fn test_early_stop_rule() {
        let meeting = parse(
            r#"
[meeting]
max_turns = 4

[meeting.early_stop]
participant = "Toby"
keyword = "policy"
"#,
        );
        let params = meeting.to_params().unwrap();
        assert_eq!(params.max_turns, 4);
        assert_eq!(params.early_stop, Some(EarlyStopRule::new("Toby", "policy")));
    }

    #[test]
    fn test_disabled_early_stop_is_dropped() {
        let meeting = parse(
            r#"
[meeting.early_stop]
enabled = false
participant = "Toby"
keyword = "policy"
"#,
        );
        assert!(meeting.to_params().unwrap().early_stop.is_none());
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        let meeting = parse(
            r#"
[meeting.early_stop]
participant = "Toby"
keyword = "  "
"#,
        );
        assert!(matches!(
            meeting.to_params(),
            Err(ConfigValidationError::EmptyKeyword { .. })
        ));
    }
}
