//! Presentation layer for huddle
//!
//! This crate contains CLI definitions, output formatters and
//! progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, DEFAULT_TOPIC, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::LiveProgress;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
