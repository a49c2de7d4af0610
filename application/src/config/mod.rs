//! Application-level configuration.
//!
//! - [`MeetingParams`]: turn loop control (turn limit, context window, early stop)

pub mod meeting_params;

pub use meeting_params::MeetingParams;
