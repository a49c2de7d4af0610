//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for meeting results
///
/// Shared by the config file and the CLI, so both accept the same labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Opening probabilities, transcript, end reason and analytics (default)
    #[default]
    Full,
    /// Transcript lines only
    Transcript,
    /// Analytics summary only
    Analytics,
    /// JSON output
    Json,
}
