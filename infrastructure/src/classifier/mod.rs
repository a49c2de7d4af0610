//! Topic classifier adapters

mod keyword;

pub use keyword::{KeywordRule, KeywordTopicClassifier};
