//! Output rendering for the `beats` tool.

use beat_common::{DisplayConfig, OutputFormat, Timestamp};
use beat_time::BeatTime;
use serde::Serialize;

/// One converted instant, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeatReport {
    /// Input instant in milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    /// Input instant as RFC 3339, when representable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
    /// Rendered beat value, e.g. `"333.25"` or `"@333"`.
    pub beats: String,
    /// Beat value scaled by `10^precision`.
    pub scaled: u64,
    /// Fractional digits in `beats`.
    pub precision: u32,
}

impl BeatReport {
    /// Convert `timestamp` using the display settings.
    #[must_use]
    pub fn new(timestamp: Timestamp, display: &DisplayConfig) -> Self {
        let value = BeatTime::from_timestamp(timestamp, display.precision);
        let beats = if display.at_sign {
            format!("{value:#}")
        } else {
            value.to_string()
        };

        Self {
            timestamp_ms: timestamp.as_millis(),
            utc: timestamp.to_rfc3339(),
            beats,
            scaled: value.scaled(),
            precision: value.precision().digits(),
        }
    }

    /// Render in the requested output format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.beats.clone()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}
