use thiserror::Error;

/// Errors raised while validating Internet Time inputs.
///
/// Conversions themselves never fail; only precision, timestamp text and
/// rendered beat strings can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BeatError {
    /// Precision was given as a negative number of digits.
    #[error("precision must be non-negative, got {0}")]
    NegativePrecision(i64),

    /// Precision exceeds the number of digits a scaled beat value can hold.
    #[error("precision {requested} exceeds maximum of {max} digits")]
    PrecisionTooLarge {
        /// Requested number of fractional digits.
        requested: i64,
        /// Largest supported number of fractional digits.
        max: u32,
    },

    /// Timestamp text was neither integer milliseconds nor RFC 3339.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// Text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A rendered beat value could not be parsed back.
    #[error("invalid beat time {input:?}: {reason}")]
    InvalidBeatTime {
        /// Text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Convenience type alias for Internet Time operations.
pub type BeatResult<T> = Result<T, BeatError>;
