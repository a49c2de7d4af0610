//! Application layer for huddle
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::MeetingParams;
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, MeetingEventKind, NoConversationLogger,
    },
    progress::{MeetingProgress, NoProgress},
    response_generator::{GenerationError, ResponseGenerator, ResponseRequest, Utterance},
    topic_classifier::{FixedTopic, TopicClassifier},
};
pub use use_cases::run_meeting::{
    MeetingResult, RunMeetingError, RunMeetingInput, RunMeetingUseCase, fallback_message,
};
