//! Engagement model - how strongly a participant wants the floor.
//!
//! A participant's *radius* for a topic is
//!
//! ```text
//! baseline × topic multiplier × suppression factor (when it applies)
//! ```
//!
//! clamped to [`RADIUS_CAP`]. The suppression factor applies only while the
//! rule's target is present and the topic is not one of the rule's
//! exemptions.

mod context;

pub use context::EngagementContext;

use crate::core::topic::Topic;
use crate::participant::profile::ParticipantProfile;

/// Upper bound on any single radius, however the multipliers stack.
pub const RADIUS_CAP: f64 = 1.0;

/// Effective engagement radius of `profile` on `topic` within `context`.
pub fn radius(profile: &ParticipantProfile, topic: Topic, context: &EngagementContext) -> f64 {
    let mut value = profile.baseline() * profile.multiplier(topic);

    if let Some(rule) = profile.suppression()
        && context.is_present(&rule.target)
        && rule.applies_to(topic)
    {
        value *= rule.factor;
    }

    value.clamp(0.0, RADIUS_CAP)
}
