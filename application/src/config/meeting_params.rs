//! Meeting parameters for turn loop control.
//!
//! [`MeetingParams`] groups the static parameters that control the turn loop
//! in [`RunMeetingUseCase`](crate::use_cases::run_meeting::RunMeetingUseCase).

use huddle_domain::EarlyStopRule;
use serde::{Deserialize, Serialize};

/// Turn loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingParams {
    /// Turns played after the seed entry.
    pub max_turns: usize,
    /// Trailing records handed to the response generator as context.
    pub recent_turns: usize,
    /// Optional keyword rule that ends the meeting early.
    pub early_stop: Option<EarlyStopRule>,
}

impl Default for MeetingParams {
    fn default() -> Self {
        Self {
            max_turns: 15,
            recent_turns: 3,
            early_stop: None,
        }
    }
}

impl MeetingParams {
    // ==================== Builder Methods ====================

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_recent_turns(mut self, count: usize) -> Self {
        self.recent_turns = count;
        self
    }

    pub fn with_early_stop(mut self, rule: EarlyStopRule) -> Self {
        self.early_stop = Some(rule);
        self
    }

    pub fn without_early_stop(mut self) -> Self {
        self.early_stop = None;
        self
    }
}
