//! Internet Time (.beat) conversion.
//!
//! Internet Time divides the day into 1000 beats of 86.4 seconds, measured
//! from midnight in Biel Mean Time (UTC+1). There are no time zones: the same
//! instant has the same beat value everywhere.
//!
//! - **Conversion** ([`beats`]): [`from_posix`], [`from_posix_custom`],
//!   [`to_beats`], [`millis_to_beats`]
//! - **Display** ([`display`]): [`display_from_posix`],
//!   [`display_from_posix_custom`], [`to_display_string`]
//!
//! Values are computed in exact integer arithmetic: the beat position is
//! scaled by `10^precision`, floored, and reduced modulo one day, so the
//! result is always non-negative even for instants before 1970.
//!
//! # Example
//!
//! ```
//! use beat_time::{display_from_posix, display_from_posix_custom, from_posix, Precision};
//!
//! // 2018-05-02T06:59:53.059Z
//! let t = 1_525_244_393_059;
//!
//! assert_eq!(from_posix(t), 333);
//! assert_eq!(display_from_posix(t), "333");
//! assert_eq!(display_from_posix_custom(t, Precision::CENTIBEATS), "333.25");
//!
//! // Whole beats are zero-padded to three digits
//! assert_eq!(display_from_posix(1_525_221_281_000), "065");
//! ```

pub mod beats;
pub mod display;

// Re-export main types for convenience
pub use beat_common::{BeatError, BeatResult, Precision, Timestamp, MAX_PRECISION};
pub use beats::{
    from_posix, from_posix_custom, millis_to_beats, millis_to_centibeats, now, now_custom,
    to_beats, BeatTime, BEAT, BEATS_PER_DAY, BMT_OFFSET_MILLIS, CENTIBEAT,
};
pub use display::{display_from_posix, display_from_posix_custom, to_display_string};
