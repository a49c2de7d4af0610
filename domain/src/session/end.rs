//! How a meeting ends

use serde::{Deserialize, Serialize};

/// Ends the meeting when `participant` says something containing `keyword`.
///
/// Matching is a case-insensitive substring test on the utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyStopRule {
    pub participant: String,
    pub keyword: String,
}

impl EarlyStopRule {
    pub fn new(participant: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            keyword: keyword.into(),
        }
    }

    pub fn matches(&self, speaker: &str, message: &str) -> bool {
        speaker == self.participant
            && !self.keyword.is_empty()
            && message
                .to_lowercase()
                .contains(&self.keyword.to_lowercase())
    }
}

/// Why an early stop fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum StopTrigger {
    /// The response generator flagged its utterance as ending the meeting
    Generator,
    /// An [`EarlyStopRule`] matched
    Keyword { keyword: String },
}

/// Terminal state of a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SessionEnd {
    /// Every requested turn was played
    TurnLimit { turns: usize },
    /// A turn signalled the end of the meeting; that turn is in the transcript
    EarlyStop {
        turn: usize,
        speaker: String,
        trigger: StopTrigger,
    },
}

impl SessionEnd {
    pub fn is_early_stop(&self) -> bool {
        matches!(self, SessionEnd::EarlyStop { .. })
    }
}

impl std::fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEnd::TurnLimit { turns } => write!(f, "turn limit reached after {} turns", turns),
            SessionEnd::EarlyStop {
                turn,
                speaker,
                trigger: StopTrigger::Generator,
            } => write!(f, "{} ended the meeting at turn {}", speaker, turn),
            SessionEnd::EarlyStop {
                turn,
                speaker,
                trigger: StopTrigger::Keyword { keyword },
            } => write!(
                f,
                "{} said \"{}\" at turn {}, meeting over",
                speaker, keyword, turn
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_matches_case_insensitively() {
        let rule = EarlyStopRule::new("Toby", "policy");
        assert!(rule.matches("Toby", "Actually, according to company POLICY..."));
        assert!(!rule.matches("Michael", "policy"));
        assert!(!rule.matches("Toby", "Michael, please..."));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert!(!EarlyStopRule::new("Toby", "").matches("Toby", "anything"));
    }

    #[test]
    fn test_session_end_serializes_with_reason_tag() {
        let end = SessionEnd::EarlyStop {
            turn: 3,
            speaker: "Toby".to_string(),
            trigger: StopTrigger::Keyword {
                keyword: "policy".to_string(),
            },
        };
        let value = serde_json::to_value(&end).unwrap();
        assert_eq!(value["reason"], "early_stop");
        assert_eq!(value["trigger"]["by"], "keyword");
        assert!(end.is_early_stop());
        assert!(!SessionEnd::TurnLimit { turns: 5 }.is_early_stop());
    }
}
