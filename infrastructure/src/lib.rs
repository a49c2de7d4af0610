//! Infrastructure layer for huddle
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod classifier;
pub mod config;
pub mod generator;
pub mod logging;

// Re-export commonly used types
pub use classifier::{KeywordRule, KeywordTopicClassifier};
pub use config::{
    BUILTIN_CAST, ConfigError, ConfigLoader, ConfigValidationError, FileConfig,
    FileMeetingConfig, FileOutputConfig, FileOutputFormat, FileParticipantConfig,
};
pub use generator::{END_MARKER, ScriptedResponseGenerator};
pub use logging::JsonlConversationLogger;
