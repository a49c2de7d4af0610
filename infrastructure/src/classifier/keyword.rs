//! Keyword-based topic classifier
//!
//! Rules are checked in order and the first rule with a keyword contained in
//! the lowercased text wins. Matching is plain substring search, so `"hr"`
//! also fires inside longer words such as "schrute"; rule order decides such
//! overlaps.

use huddle_application::TopicClassifier;
use huddle_domain::Topic;

/// Keywords that map text onto one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    topic: Topic,
    keywords: Vec<String>,
}

impl KeywordRule {
    /// Keywords are lowercased; blank ones are dropped.
    pub fn new<S: AsRef<str>>(topic: Topic, keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            topic,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered keyword classifier; anything unmatched is [`Topic::General`]
#[derive(Debug, Clone)]
pub struct KeywordTopicClassifier {
    rules: Vec<KeywordRule>,
}

impl KeywordTopicClassifier {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl Default for KeywordTopicClassifier {
    fn default() -> Self {
        Self::new(vec![
            KeywordRule::new(
                Topic::Management,
                ["manage", "boss", "meeting", "corporate", "business"],
            ),
            KeywordRule::new(Topic::Hr, ["hr", "human resources", "policy", "complaint"]),
            KeywordRule::new(Topic::Beets, ["beet", "farm", "schrute"]),
            KeywordRule::new(
                Topic::Survival,
                ["survive", "bear", "fight", "weapons", "attack"],
            ),
            KeywordRule::new(
                Topic::Conspiracy,
                ["conspiracy", "government", "secret", "truth"],
            ),
            KeywordRule::new(
                Topic::Confusion,
                ["confused", "don't understand", "what", "how"],
            ),
        ])
    }
}

impl TopicClassifier for KeywordTopicClassifier {
    fn classify(&self, text: &str) -> Topic {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(KeywordRule::topic)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Topic {
        KeywordTopicClassifier::default().classify(text)
    }

    #[test]
    fn test_builtin_topics() {
        assert_eq!(classify("Quarterly business review"), Topic::Management);
        assert_eq!(classify("I have a complaint"), Topic::Hr);
        assert_eq!(classify("We grow beets on the farm"), Topic::Beets);
        assert_eq!(classify("Only the strong survive"), Topic::Survival);
        assert_eq!(classify("It's a government cover-up"), Topic::Conspiracy);
        assert_eq!(classify("I'm so confused"), Topic::Confusion);
    }

    #[test]
    fn test_unmatched_text_is_general() {
        assert_eq!(classify("Nice sweater today"), Topic::General);
        assert_eq!(classify(""), Topic::General);
    }

    #[test]
    fn test_first_rule_wins() {
        // "policy" is HR but "boss" comes from an earlier rule
        assert_eq!(classify("The boss ignored the policy"), Topic::Management);
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(classify("HUMAN RESOURCES"), Topic::Hr);
    }

    #[test]
    fn test_keywords_are_normalized() {
        let rule = KeywordRule::new(Topic::Sales, [" Quota ", "", "CLIENT"]);
        assert_eq!(rule.keywords(), ["quota", "client"]);
    }
}
