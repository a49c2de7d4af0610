//! Classifier configuration from TOML (`[[classifier.rules]]`)

use super::ConfigValidationError;
use crate::classifier::{KeywordRule, KeywordTopicClassifier};
use huddle_domain::Topic;
use serde::{Deserialize, Serialize};

/// Raw classifier configuration from TOML
///
/// When `rules` is empty the built-in keyword table is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    pub rules: Vec<FileClassifierRule>,
}

/// One ordered keyword rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileClassifierRule {
    pub topic: String,
    pub keywords: Vec<String>,
}

impl FileClassifierConfig {
    pub fn to_classifier(&self) -> Result<KeywordTopicClassifier, ConfigValidationError> {
        if self.rules.is_empty() {
            return Ok(KeywordTopicClassifier::default());
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for (index, rule) in self.rules.iter().enumerate() {
            let field = format!("classifier.rules[{}]", index);
            let topic = rule
                .topic
                .parse::<Topic>()
                .map_err(|source| ConfigValidationError::Topic {
                    field: field.clone(),
                    source,
                })?;
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ConfigValidationError::EmptyKeyword { field });
            }
            rules.push(KeywordRule::new(topic, rule.keywords.iter()));
        }
        Ok(KeywordTopicClassifier::new(rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_application::TopicClassifier;

    #[test]
    fn test_empty_rules_use_builtin_table() {
        let classifier = FileClassifierConfig::default().to_classifier().unwrap();
        assert_eq!(classifier.classify("A beet farm"), Topic::Beets);
    }

    #[test]
    fn test_custom_rules_replace_builtin_table() {
        let config: super::super::FileConfig = toml::from_str(
            r#"
[[classifier.rules]]
topic = "sales"
keywords = ["Quota", "client"]
"#,
        )
        .unwrap();
        let classifier = config.classifier.to_classifier().unwrap();

        assert_eq!(classifier.classify("We missed our quota"), Topic::Sales);
        assert_eq!(classifier.classify("A beet farm"), Topic::General);
    }

    #[test]
    fn test_rule_without_keywords_is_rejected() {
        let config = FileClassifierConfig {
            rules: vec![FileClassifierRule {
                topic: "sales".to_string(),
                keywords: vec![" ".to_string()],
            }],
        };
        assert!(matches!(
            config.to_classifier(),
            Err(ConfigValidationError::EmptyKeyword { .. })
        ));
    }
}
