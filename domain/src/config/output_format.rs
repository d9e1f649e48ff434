//! Output format value object

use serde::{Deserialize, Serialize};

/// What a finished run prints
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the final document (default)
    #[default]
    Document,
    /// Only the captured analysis
    Analysis,
    /// Analysis followed by the document, with headings
    Full,
    /// Both as a JSON object
    Json,
}
