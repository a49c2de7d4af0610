//! Topic classifier port
//!
//! Maps free text onto the closed [`Topic`] set.

use huddle_domain::Topic;

/// Classifies utterances into topic labels.
///
/// Classification is total: text that matches nothing is
/// [`Topic::General`]. Implementations must be pure and synchronous.
pub trait TopicClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Topic;
}

/// Classifier that labels everything with one topic
pub struct FixedTopic(pub Topic);

impl TopicClassifier for FixedTopic {
    fn classify(&self, _text: &str) -> Topic {
        self.0
    }
}
